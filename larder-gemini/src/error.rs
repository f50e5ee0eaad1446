use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text")]
    EmptyResponse,
}
