//! Gemini generateContent API client implementation
//!
//! Implements the GenerativeClient trait against Google's Generative
//! Language REST API. One POST per call, no retry, no streaming.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::{GenerativeClient, LlmError};
use crate::config::LlmConfig;

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::Invalid(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Build the generateContent request body
    ///
    /// A single content with a single text part holding the whole prompt.
    fn build_request_body(prompt: &str) -> GenerateRequest {
        debug!(prompt_len = prompt.len(), "build_request_body: called");
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    /// Pull the first candidate's first part's text out of the response
    fn first_candidate_text(response: GenerateResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        debug!(model = %self.model, "generate: called");
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = Self::build_request_body(prompt);

        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            // No usable body; the caller treats this as "nothing to show"
            let text = response.text().await.unwrap_or_default();
            warn!(status, body = %text, "generate: non-success status, returning empty");
            return Ok(None);
        }

        debug!("generate: success");
        let api_response: GenerateResponse = response.json().await.map_err(LlmError::Network)?;
        Ok(Self::first_candidate_text(api_response))
    }
}

// Gemini API wire types

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
