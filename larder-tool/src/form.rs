use larder_core::{GroceryCategory, ItemCandidate};
use larder_gemini::{DescriptionGenerator, TextGeneration};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields: Name, Price, and Quantity.")]
    MissingRequired,

    #[error("Price must be a number of zero or more.")]
    InvalidPrice,

    #[error("Quantity must be a whole number of zero or more.")]
    InvalidQuantity,

    #[error("Please enter an item name first.")]
    NameRequired,

    #[error("Failed to generate description.")]
    GenerationFailed,
}

/// Raw add-item form state, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category: GroceryCategory,
    pub price: String,
    pub quantity: String,
    pub description: String,
    pub image_url: String,
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the form into a candidate without clearing it.
    pub fn to_candidate(&self) -> Result<ItemCandidate, FormError> {
        let name = self.name.trim();
        let price = self.price.trim();
        let quantity = self.quantity.trim();

        if name.is_empty() || price.is_empty() || quantity.is_empty() {
            return Err(FormError::MissingRequired);
        }

        let price: f64 = price.parse().map_err(|_| FormError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(FormError::InvalidPrice);
        }
        // "-0" parses to negative zero
        let price = price + 0.0;

        let quantity: u32 = quantity.parse().map_err(|_| FormError::InvalidQuantity)?;

        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(String::from);

        Ok(ItemCandidate {
            name: name.to_string(),
            category: self.category,
            price,
            quantity,
            description: self.description.clone(),
            image_url,
        })
    }

    /// Validates the form and resets it on success. A rejected form keeps
    /// its contents.
    pub fn submit(&mut self) -> Result<ItemCandidate, FormError> {
        let candidate = self.to_candidate()?;
        self.reset();
        Ok(candidate)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fills the description from the generator. On a failed request the
    /// generator's fallback text lands in the field.
    pub async fn generate_description<G: TextGeneration>(
        &mut self,
        generator: &DescriptionGenerator<G>,
    ) -> Result<(), FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        self.description = generator
            .generate_description(name, Some(self.category))
            .await
            .map_err(|_| FormError::GenerationFailed)?;
        Ok(())
    }
}
