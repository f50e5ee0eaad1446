/// Token accounting reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageMetadata {
    pub prompt_tokens: Option<u64>,
    pub candidates_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

/// Text produced by a single `generateContent` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    /// Concatenated text parts of the first candidate, untrimmed.
    pub text: String,
    pub model_version: Option<String>,
    /// Reason the model stopped generating.
    pub finish_reason: Option<String>,
    pub usage: Option<UsageMetadata>,
}
