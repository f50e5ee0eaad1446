use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown grocery category: {0}")]
pub struct UnknownCategory(pub String);

/// Aisle a grocery item is shelved under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroceryCategory {
    #[default]
    #[serde(rename = "Fruits & Vegetables")]
    FruitsVegetables,
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Other,
}

impl GroceryCategory {
    /// All categories in menu order.
    pub const ALL: [GroceryCategory; 8] = [
        GroceryCategory::FruitsVegetables,
        GroceryCategory::DairyEggs,
        GroceryCategory::MeatSeafood,
        GroceryCategory::Bakery,
        GroceryCategory::Pantry,
        GroceryCategory::Frozen,
        GroceryCategory::Beverages,
        GroceryCategory::Other,
    ];

    /// Human-readable label, also used verbatim in generation prompts.
    pub fn label(self) -> &'static str {
        match self {
            GroceryCategory::FruitsVegetables => "Fruits & Vegetables",
            GroceryCategory::DairyEggs => "Dairy & Eggs",
            GroceryCategory::MeatSeafood => "Meat & Seafood",
            GroceryCategory::Bakery => "Bakery",
            GroceryCategory::Pantry => "Pantry",
            GroceryCategory::Frozen => "Frozen",
            GroceryCategory::Beverages => "Beverages",
            GroceryCategory::Other => "Other",
        }
    }

    /// Short, shell-friendly key.
    pub fn key(self) -> &'static str {
        match self {
            GroceryCategory::FruitsVegetables => "fruits-vegetables",
            GroceryCategory::DairyEggs => "dairy-eggs",
            GroceryCategory::MeatSeafood => "meat-seafood",
            GroceryCategory::Bakery => "bakery",
            GroceryCategory::Pantry => "pantry",
            GroceryCategory::Frozen => "frozen",
            GroceryCategory::Beverages => "beverages",
            GroceryCategory::Other => "other",
        }
    }
}

impl std::str::FromStr for GroceryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        GroceryCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_and_key() {
        assert_eq!(
            "Fruits & Vegetables".parse::<GroceryCategory>(),
            Ok(GroceryCategory::FruitsVegetables)
        );
        assert_eq!(
            "dairy & eggs".parse::<GroceryCategory>(),
            Ok(GroceryCategory::DairyEggs)
        );
        assert_eq!(
            "meat-seafood".parse::<GroceryCategory>(),
            Ok(GroceryCategory::MeatSeafood)
        );
        assert_eq!(
            " Frozen ".parse::<GroceryCategory>(),
            Ok(GroceryCategory::Frozen)
        );
    }

    #[test]
    fn rejects_unknown() {
        let err = "Snacks".parse::<GroceryCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("Snacks".to_string()));
    }

    #[test]
    fn display_matches_label() {
        for category in GroceryCategory::ALL {
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[test]
    fn default_is_fruits_and_vegetables() {
        assert_eq!(GroceryCategory::default(), GroceryCategory::FruitsVegetables);
    }
}
