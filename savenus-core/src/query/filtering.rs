//! Display filters applied before ordering.

use savenus_model::Food;

/// Which foods are shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FoodFilter {
    #[default]
    All,
    /// Foods whose name contains any keyword as a whole word, ignoring case
    NameContainsKeywords(Vec<String>),
}

impl FoodFilter {
    /// Build a keyword filter, dropping blank keywords. Falls back to
    /// [`FoodFilter::All`] when nothing is left.
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            FoodFilter::All
        } else {
            FoodFilter::NameContainsKeywords(keywords)
        }
    }

    pub fn matches(&self, food: &Food) -> bool {
        match self {
            FoodFilter::All => true,
            FoodFilter::NameContainsKeywords(keywords) => {
                let name = food.name().as_str();
                keywords
                    .iter()
                    .any(|keyword| contains_word_ignore_case(name, keyword))
            }
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    sentence
        .split_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use savenus_model::{Category, Name, Price};

    fn food(name: &str) -> Food {
        Food::new(
            Name::new(name).unwrap(),
            Price::new("1").unwrap(),
            Category::new("Meal").unwrap(),
        )
    }

    #[test]
    fn keyword_matches_whole_words_only() {
        let filter = FoodFilter::keywords(["rice"]);
        assert!(filter.matches(&food("Chicken Rice")));
        assert!(!filter.matches(&food("Ricecake")));
    }

    #[test]
    fn any_keyword_is_enough() {
        let filter = FoodFilter::keywords(["laksa", "MEE"]);
        assert!(filter.matches(&food("Mee Goreng")));
        assert!(filter.matches(&food("Curry Laksa")));
        assert!(!filter.matches(&food("Chicken Rice")));
    }

    #[test]
    fn blank_keywords_mean_show_everything() {
        assert_eq!(FoodFilter::keywords(["  ", ""]), FoodFilter::All);
        assert!(FoodFilter::All.matches(&food("Anything")));
    }
}
