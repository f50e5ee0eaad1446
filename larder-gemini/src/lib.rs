//! Gemini text generation for the larder catalog.
//!
//! This crate provides a small client for the Gemini `generateContent`
//! endpoint and the description generator built on top of it.
//!
//! # Example
//!
//! ```ignore
//! use larder_core::GroceryCategory;
//! use larder_gemini::{DescriptionGenerator, GeminiClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let generator = DescriptionGenerator::new(GeminiClient::new("your-api-key"));
//!
//!     let text = generator
//!         .generate_description("Organic Apples", Some(GroceryCategory::FruitsVegetables))
//!         .await
//!         .unwrap();
//! }
//! ```

mod client;
mod convert;
mod error;
mod generator;
mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use convert::{build_request_body, error_message, parse_response};
pub use error::GeminiError;
pub use generator::{
    description_prompt, Description, DescriptionError, DescriptionGenerator, TextGeneration,
    DEFAULT_MODEL, FALLBACK_DESCRIPTION,
};
pub use types::{GeneratedContent, UsageMetadata};
