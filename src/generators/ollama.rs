//! Ollama chat client.
//!
//! Minimal non-streaming client for Ollama's `/api/chat` endpoint. The
//! pipeline only needs single-turn completions, so the wire types cover
//! exactly that.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::traits::PostGenerator;

/// Default Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Chat request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

/// A single chat message.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Successful chat response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Error payload Ollama returns with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Generation backend backed by a local or remote Ollama server.
///
/// # Example
///
/// ```rust,ignore
/// use spotlight::generators::OllamaGenerator;
/// use spotlight::traits::PostGenerator;
///
/// let client = OllamaGenerator::new();
/// let reply = client.generate("llama3.1:latest", "Say hello").await?;
/// ```
pub struct OllamaGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl Default for OllamaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaGenerator {
    /// Create a client against the default local endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PostGenerator for OllamaGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> GenerateResult<String> {
        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        debug!(model = %model, prompt_len = prompt.len(), "Sending chat request");

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(GenerateError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(GenerateError::Api { message });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

        Ok(body.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "llama3.1:latest",
            messages: vec![ChatMessage {
                role: "user",
                content: "Write a post",
            }],
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.1:latest");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Write a post");
    }

    #[test]
    fn test_response_deserialization() {
        let raw = r#"{
            "model": "llama3.1:latest",
            "message": {"role": "assistant", "content": "Here is your post."},
            "done": true
        }"#;

        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.message.content, "Here is your post.");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OllamaGenerator::with_base_url("http://ollama:11434/");
        assert_eq!(client.base_url, "http://ollama:11434");
    }
}
