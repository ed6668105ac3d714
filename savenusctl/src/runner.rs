//! Command implementations shared by the binary and its tests.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use savenus_core::{
    Command, FoodFilter, Model, SortCommand, SortDirection, SortField,
};
use tracing::info;

use crate::config::{CliConfig, MENU_ENV};
use crate::snapshot::MenuSnapshot;
use crate::table;

#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    pub menu: Option<PathBuf>,
    pub keywords: Vec<String>,
    pub tokens: Vec<String>,
}

/// How a `sort` run ended. Rejected arguments are a user error, not a
/// failure of the tool, so they are reported separately from `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted { shown: usize },
    Rejected { message: String },
}

pub fn run_sort<W: Write>(
    opts: &SortOptions,
    config: &CliConfig,
    out: &mut W,
) -> Result<SortOutcome> {
    // Bad arguments are reported before any file is read.
    let command = SortCommand::new(opts.tokens.iter().cloned());
    if let Err(err) = command.specification() {
        return Ok(SortOutcome::Rejected {
            message: err.to_string(),
        });
    }

    let path = config.menu_path(opts.menu.as_deref()).ok_or_else(|| {
        anyhow!("no menu snapshot configured; pass --menu or set {MENU_ENV}")
    })?;
    let menu = MenuSnapshot::read(&path)
        .and_then(MenuSnapshot::into_menu)
        .with_context(|| format!("loading menu from {}", path.display()))?;
    info!(path = %path.display(), foods = menu.foods().len(), "loaded menu");

    let mut model = Model::new(menu);
    model.update_filter(FoodFilter::keywords(&opts.keywords));

    let result = command.execute(&mut model)?;
    let shown = model.displayed_foods();
    write!(out, "{}", table::render(&shown))?;
    writeln!(out, "{result}")?;
    Ok(SortOutcome::Sorted { shown: shown.len() })
}

pub fn run_fields<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Fields:")?;
    for field in SortField::ALL {
        writeln!(out, "  {field}")?;
    }
    writeln!(out, "Directions:")?;
    for direction in SortDirection::ALL {
        let meaning = match direction {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };
        writeln!(out, "  {direction} ({meaning})")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MENU: &str = r#"{"foods": [
        {"name": "Chicken Rice", "price": "4", "category": "Meal"},
        {"name": "Kopi", "price": "1.2", "category": "Drink"},
        {"name": "Laksa", "price": "5.5", "category": "Meal"}
    ]}"#;

    fn write_menu(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("menu.json");
        fs::write(&path, MENU).unwrap();
        path
    }

    #[test]
    fn sorts_and_prints_table_then_message() {
        let dir = tempfile::tempdir().unwrap();
        let opts = SortOptions {
            menu: Some(write_menu(&dir)),
            keywords: vec![],
            tokens: vec!["PRICE".into(), "DESC".into()],
        };
        let mut out: Vec<u8> = Vec::new();

        let outcome = run_sort(&opts, &CliConfig::default(), &mut out).unwrap();

        assert_eq!(outcome, SortOutcome::Sorted { shown: 3 });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("1  Laksa"));
        assert!(lines[3].starts_with("3  Kopi"));
        assert_eq!(lines[4], SortCommand::MESSAGE_SUCCESS);
    }

    #[test]
    fn keywords_filter_before_sorting() {
        let dir = tempfile::tempdir().unwrap();
        let opts = SortOptions {
            menu: Some(write_menu(&dir)),
            keywords: vec!["kopi".into()],
            tokens: vec!["NAME".into(), "ASC".into()],
        };
        let mut out: Vec<u8> = Vec::new();

        let outcome = run_sort(&opts, &CliConfig::default(), &mut out).unwrap();

        assert_eq!(outcome, SortOutcome::Sorted { shown: 1 });
    }

    #[test]
    fn rejected_tokens_print_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let opts = SortOptions {
            menu: Some(write_menu(&dir)),
            keywords: vec![],
            tokens: vec!["PRICE".into()],
        };
        let mut out: Vec<u8> = Vec::new();

        let outcome = run_sort(&opts, &CliConfig::default(), &mut out).unwrap();

        assert_eq!(
            outcome,
            SortOutcome::Rejected {
                message: SortCommand::MISSING_DIRECTION_USAGE.to_string()
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn rejected_tokens_do_not_need_a_menu() {
        let opts = SortOptions::default();
        let mut out: Vec<u8> = Vec::new();

        let outcome = run_sort(&opts, &CliConfig::default(), &mut out).unwrap();

        assert_eq!(
            outcome,
            SortOutcome::Rejected {
                message: SortCommand::NO_ARGUMENTS_USAGE.to_string()
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn missing_menu_is_an_error() {
        let opts = SortOptions {
            tokens: vec!["PRICE".into(), "ASC".into()],
            ..SortOptions::default()
        };
        let err = run_sort(&opts, &CliConfig::default(), &mut Vec::<u8>::new())
            .unwrap_err();
        assert!(err.to_string().contains("--menu"));
    }

    #[test]
    fn fields_lists_every_token() {
        let mut out: Vec<u8> = Vec::new();
        run_fields(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for field in SortField::ALL {
            assert!(text.contains(field.token()));
        }
        assert!(text.contains("ASC (ascending)"));
        assert!(text.contains("DESC (descending)"));
    }
}
