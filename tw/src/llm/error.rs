//! LLM error types

use thiserror::Error;

/// Errors that can occur while talking to the generative API
///
/// Non-success HTTP statuses are not represented here: the client treats
/// them as "no usable body" and yields an empty completion instead of an
/// error, so only transport and payload failures surface.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Invalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let err = LlmError::Invalid("empty candidate".to_string());
        assert_eq!(err.to_string(), "Invalid response: empty candidate");

        let bad: Result<serde_json::Value, _> = serde_json::from_str("not json");
        let err = LlmError::Json(bad.unwrap_err());
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
