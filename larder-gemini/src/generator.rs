use async_trait::async_trait;
use larder_core::GroceryCategory;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::client::GeminiClient;
use crate::error::GeminiError;

/// Model used for descriptions unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Text handed back in place of a failed generation.
pub const FALLBACK_DESCRIPTION: &str = "Failed to generate description. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Item name and category are required to generate a description.")]
    InvalidArgument,
}

/// A backend able to turn a prompt into text.
///
/// Implemented by [`GeminiClient`]; tests substitute their own.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError>;
}

#[async_trait]
impl TextGeneration for GeminiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        let content = self.generate_content(model, prompt).await?;
        Ok(content.text)
    }
}

#[async_trait]
impl<T: TextGeneration + ?Sized> TextGeneration for &T {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        (**self).generate_text(model, prompt).await
    }
}

/// Outcome of a description request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Trimmed text returned by the service.
    Generated(String),
    /// The service call failed; see the logs for the cause.
    Fallback,
}

impl Description {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Description::Fallback)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Description::Generated(text) => text,
            Description::Fallback => FALLBACK_DESCRIPTION,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Description::Generated(text) => text,
            Description::Fallback => FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// Builds the prompt for a product description. Name and category are
/// embedded verbatim.
pub fn description_prompt(item_name: &str, category: GroceryCategory) -> String {
    format!(
        "Generate a brief, appealing grocery store item description for a product named \"{}\" in the \"{}\" category. The description should be concise, enticing for customers, and under 40 words.",
        item_name,
        category.label()
    )
}

/// Drafts grocery item descriptions through a text-generation backend.
pub struct DescriptionGenerator<G> {
    backend: G,
    model: String,
}

impl<G: TextGeneration> DescriptionGenerator<G> {
    pub fn new(backend: G) -> Self {
        Self::with_model(backend, DEFAULT_MODEL)
    }

    pub fn with_model(backend: G, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests a description, reporting failures as [`Description::Fallback`].
    ///
    /// Fails with [`DescriptionError::InvalidArgument`] before any request
    /// when the name is empty or the category is missing.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn generate(
        &self,
        item_name: &str,
        category: Option<GroceryCategory>,
    ) -> Result<Description, DescriptionError> {
        let category = match category {
            Some(category) if !item_name.is_empty() => category,
            _ => return Err(DescriptionError::InvalidArgument),
        };

        let prompt = description_prompt(item_name, category);

        match self.backend.generate_text(&self.model, &prompt).await {
            Ok(text) => {
                debug!("Description generated");
                Ok(Description::Generated(text.trim().to_string()))
            }
            Err(err) => {
                error!(error = %err, "Error generating description with Gemini API");
                Ok(Description::Fallback)
            }
        }
    }

    /// Requests a description, returning [`FALLBACK_DESCRIPTION`] on failure.
    pub async fn generate_description(
        &self,
        item_name: &str,
        category: Option<GroceryCategory>,
    ) -> Result<String, DescriptionError> {
        self.generate(item_name, category)
            .await
            .map(Description::into_text)
    }
}
