//! Testing utilities including mock implementations.
//!
//! Useful for exercising the pipeline without real network or backend
//! calls. Both mocks record their calls so tests can assert on ordering
//! and counts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult, GenerateError, GenerateResult};
use crate::traits::{PageFetcher, PostGenerator};

/// A mock page fetcher with canned pages per URL.
///
/// URLs without a canned page or failure yield an HTTP 404 error, which the
/// pipeline treats as a skip.
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    timeouts: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a mock fetcher with no canned pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }

    /// Make `url` fail with a timeout.
    pub fn with_timeout(self, url: impl Into<String>) -> Self {
        self.timeouts.write().unwrap().push(url.into());
        self
    }

    /// URLs fetched so far, in call order.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if self.timeouts.read().unwrap().iter().any(|u| u == url) {
            return Err(FetchError::Timeout {
                url: url.to_string(),
            });
        }

        match self.pages.read().unwrap().get(url) {
            Some(html) => Ok(html.clone()),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// Record of one call made to [`MockGenerator`].
#[derive(Debug, Clone)]
pub struct GeneratorCall {
    /// Model identifier the pipeline passed
    pub model: String,

    /// Full prompt text
    pub prompt: String,
}

/// A mock generation backend with substring-keyed responses.
///
/// The first configured rule whose key appears in the prompt wins; rules
/// are checked in insertion order. Prompts matching no rule get the default
/// reply.
#[derive(Default)]
pub struct MockGenerator {
    rules: Arc<RwLock<Vec<(String, GenerateResult<String>)>>>,
    default_reply: Arc<RwLock<String>>,
    calls: Arc<RwLock<Vec<GeneratorCall>>>,
}

impl MockGenerator {
    /// Create a mock generator that replies with an empty string by default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `reply` to any prompt containing `key`.
    pub fn with_response(self, key: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules
            .write()
            .unwrap()
            .push((key.into(), Ok(reply.into())));
        self
    }

    /// Fail any prompt containing `key` with a backend error.
    pub fn with_failure(self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.write().unwrap().push((
            key.into(),
            Err(GenerateError::Api {
                message: message.into(),
            }),
        ));
        self
    }

    /// Set the reply for prompts that match no rule.
    pub fn with_default_reply(self, reply: impl Into<String>) -> Self {
        *self.default_reply.write().unwrap() = reply.into();
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PostGenerator for MockGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> GenerateResult<String> {
        self.calls.write().unwrap().push(GeneratorCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        for (key, result) in self.rules.read().unwrap().iter() {
            if prompt.contains(key.as_str()) {
                return match result {
                    Ok(reply) => Ok(reply.clone()),
                    Err(GenerateError::Api { message }) => Err(GenerateError::Api {
                        message: message.clone(),
                    }),
                    Err(e) => Err(GenerateError::MalformedResponse(e.to_string())),
                };
            }
        }

        Ok(self.default_reply.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetcher_unknown_url_is_404() {
        let fetcher = MockFetcher::new();
        let err = fetcher.fetch("http://nowhere.example").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_mock_generator_first_matching_rule_wins() {
        let generator = MockGenerator::new()
            .with_response("Facebook", "fb reply")
            .with_response("Coordinator", "generic reply");

        let reply = generator
            .generate("m", "As the Facebook Coordinator...")
            .await
            .unwrap();
        assert_eq!(reply, "fb reply");
    }

    #[tokio::test]
    async fn test_mock_generator_records_calls() {
        let generator = MockGenerator::new().with_default_reply("ok");
        generator.generate("model-a", "prompt one").await.unwrap();
        generator.generate("model-a", "prompt two").await.unwrap();

        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].prompt, "prompt two");
    }
}
