use serde::{Deserialize, Serialize};

use crate::category::GroceryCategory;

/// Stable identifier for items (UUID format)
pub type ItemId = String;

const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/seed";
const NO_DESCRIPTION: &str = "No description provided.";

/// Item fields supplied by a caller before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCandidate {
    pub name: String,
    pub category: GroceryCategory,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
    pub image_url: Option<String>,
}

/// One catalog entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: ItemId,
    pub name: String,
    pub category: GroceryCategory,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
    pub image_url: Option<String>,
}

impl GroceryItem {
    pub(crate) fn from_candidate(id: ItemId, candidate: ItemCandidate) -> Self {
        let ItemCandidate {
            name,
            category,
            price,
            quantity,
            description,
            image_url,
        } = candidate;

        Self {
            id,
            name,
            category,
            price,
            quantity,
            description,
            image_url,
        }
    }

    /// The item's image, or a placeholder seeded by its id.
    pub fn display_image_url(&self) -> String {
        match &self.image_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("{}/{}/400/400", PLACEHOLDER_IMAGE_BASE, self.id),
        }
    }

    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            NO_DESCRIPTION
        } else {
            &self.description
        }
    }

    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Returns the item's fields without its id.
    pub fn candidate(&self) -> ItemCandidate {
        ItemCandidate {
            name: self.name.clone(),
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
