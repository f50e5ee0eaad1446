use serde_json::{json, Value};

use crate::error::GeminiError;
use crate::types::{GeneratedContent, UsageMetadata};

/// Finish reasons that mean the candidate was withheld rather than empty.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Builds a single-turn `generateContent` request body.
pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Extracts the error message from a Gemini error body, if any.
pub fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(String::from)
}

/// Parses a `generateContent` response.
pub fn parse_response(response: &Value) -> Result<GeneratedContent, GeminiError> {
    let Some(candidate) = response.get("candidates").and_then(|c| c.get(0)) else {
        let block_reason = response
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
            .and_then(|r| r.as_str());
        return Err(match block_reason {
            Some(reason) => GeminiError::Blocked(reason.to_string()),
            None => GeminiError::EmptyResponse,
        });
    };

    let finish_reason = candidate
        .get("finishReason")
        .and_then(|r| r.as_str())
        .map(String::from);

    // Thought summaries are not part of the answer
    let texts: Vec<&str> = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .into_iter()
        .flatten()
        .filter(|part| !part.get("thought").and_then(|t| t.as_bool()).unwrap_or(false))
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if texts.is_empty() {
        return Err(match finish_reason {
            Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) => {
                GeminiError::Blocked(reason)
            }
            _ => GeminiError::EmptyResponse,
        });
    }

    let model_version = response
        .get("modelVersion")
        .and_then(|m| m.as_str())
        .map(String::from);

    let usage = response.get("usageMetadata").map(|u| UsageMetadata {
        prompt_tokens: u.get("promptTokenCount").and_then(|t| t.as_u64()),
        candidates_tokens: u.get("candidatesTokenCount").and_then(|t| t.as_u64()),
        total_tokens: u.get("totalTokenCount").and_then(|t| t.as_u64()),
    });

    Ok(GeneratedContent {
        text: texts.concat(),
        model_version,
        finish_reason,
        usage,
    })
}
