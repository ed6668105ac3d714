//! Plain-text table rendering for displayed foods.

use savenus_core::SortField;
use savenus_model::Food;

const MISSING: &str = "-";

fn cell(food: &Food, field: SortField) -> String {
    let text = match field {
        SortField::Name => Some(food.name().to_string()),
        SortField::Price => Some(format!("${}", food.price())),
        SortField::Category => Some(food.category().to_string()),
        SortField::Description => food.description().map(ToString::to_string),
        SortField::Location => food.location().map(ToString::to_string),
        SortField::OpeningHours => {
            food.opening_hours().map(ToString::to_string)
        }
        SortField::Restrictions => {
            food.restrictions().map(ToString::to_string)
        }
    };
    text.unwrap_or_else(|| MISSING.to_string())
}

/// Render `foods` with one numbered row each, in the order given.
pub fn render(foods: &[&Food]) -> String {
    let mut header = vec!["#".to_string()];
    header.extend(SortField::ALL.iter().map(|f| f.token().to_string()));

    let rows: Vec<Vec<String>> = foods
        .iter()
        .enumerate()
        .map(|(i, food)| {
            let mut row = vec![(i + 1).to_string()];
            row.extend(SortField::ALL.iter().map(|f| cell(food, *f)));
            row
        })
        .collect();

    let mut widths: Vec<usize> =
        header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, width)| {
                let pad = width - value.chars().count();
                format!("{value}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
