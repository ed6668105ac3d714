//! Read-only JSON menu snapshots consumed by the CLI.
//!
//! ```json
//! {
//!   "foods": [
//!     { "name": "Chicken Rice", "price": "4.00", "category": "Meal",
//!       "location": "The Deck" }
//!   ],
//!   "wallet": { "remaining_budget": "50.00", "days_to_expire": 7 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use savenus_core::{Menu, MenuError};
use savenus_model::{Food, Wallet};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read menu snapshot {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("menu snapshot is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("menu snapshot is inconsistent")]
    Menu(#[from] MenuError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuSnapshot {
    #[serde(default)]
    pub foods: Vec<Food>,
    #[serde(default)]
    pub wallet: Wallet,
}

impl MenuSnapshot {
    pub fn read(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path).map_err(|source| {
            SnapshotError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build a menu, rejecting snapshots that list the same food twice.
    pub fn into_menu(self) -> Result<Menu, SnapshotError> {
        Ok(Menu::from_foods(self.foods, self.wallet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_foods_and_wallet() {
        let snapshot = MenuSnapshot::from_json(
            r#"{
                "foods": [
                    {"name": "Kopi", "price": "1.2", "category": "Drink"},
                    {"name": "Laksa", "price": "5.50", "category": "Meal",
                     "location": "Deck", "restrictions": "halal"}
                ],
                "wallet": {"remaining_budget": "30", "days_to_expire": 5}
            }"#,
        )
        .unwrap();

        let menu = snapshot.into_menu().unwrap();
        assert_eq!(menu.foods().len(), 2);
        assert_eq!(menu.foods()[0].price().cents(), 120);
        assert_eq!(
            menu.foods()[1].restrictions().map(|r| r.as_str()),
            Some("halal")
        );
        assert_eq!(menu.wallet().days_to_expire().value(), 5);
    }

    #[test]
    fn wallet_is_optional() {
        let menu = MenuSnapshot::from_json(r#"{"foods": []}"#)
            .unwrap()
            .into_menu()
            .unwrap();
        assert_eq!(*menu.wallet(), Wallet::default());
    }

    #[test]
    fn duplicate_foods_are_rejected() {
        let err = MenuSnapshot::from_json(
            r#"{"foods": [
                {"name": "Kopi", "price": "1", "category": "Drink"},
                {"name": "Kopi", "price": "2", "category": "Drink"}
            ]}"#,
        )
        .unwrap()
        .into_menu()
        .unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Menu(MenuError::DuplicateFood(ref name)) if name == "Kopi"
        ));
    }

    #[test]
    fn invalid_values_fail_to_parse() {
        let err = MenuSnapshot::from_json(
            r#"{"foods": [{"name": "Kopi", "price": "cheap", "category": "Drink"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }
}
