//! GenerativeClient trait definition

use async_trait::async_trait;

use super::LlmError;

/// Stateless generative-text client - each call is independent
///
/// This is the seam between the request service and the external API.
/// `generate` resolves to the first candidate's text, or `None` when the
/// service answered but produced no usable body ("soft empty"). Transport
/// failures surface as errors.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one prompt and return the raw completion text, if any
    ///
    /// Exactly one request per call: no retry, no streaming, no pagination.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock generative client for unit tests
    ///
    /// Returns scripted responses in order and records every prompt it saw.
    pub struct MockGenerativeClient {
        responses: Vec<Option<String>>,
        prompts: Mutex<Vec<String>>,
        call_count: AtomicUsize,
    }

    impl MockGenerativeClient {
        pub fn new(responses: Vec<Option<String>>) -> Self {
            debug!(response_count = %responses.len(), "MockGenerativeClient::new: called");
            Self {
                responses,
                prompts: Mutex::new(Vec::new()),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Shorthand for a client that always answers with one body
        pub fn with_body(body: &str) -> Self {
            Self::new(vec![Some(body.to_string())])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        /// Prompts received so far, in call order
        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeClient for MockGenerativeClient {
        async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            debug!("MockGenerativeClient::generate: called");
            self.prompts.lock().unwrap().push(prompt.to_string());
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(idx)
                .cloned()
                .ok_or_else(|| LlmError::Invalid("No more mock responses".to_string()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_responses_in_order() {
            let client = MockGenerativeClient::new(vec![
                Some("Response 1".to_string()),
                None,
            ]);

            let first = client.generate("p1").await.unwrap();
            assert_eq!(first, Some("Response 1".to_string()));

            let second = client.generate("p2").await.unwrap();
            assert_eq!(second, None);

            assert_eq!(client.call_count(), 2);
            assert_eq!(client.prompts(), vec!["p1".to_string(), "p2".to_string()]);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockGenerativeClient::new(vec![]);
            let result = client.generate("p").await;
            assert!(result.is_err());
        }
    }
}
