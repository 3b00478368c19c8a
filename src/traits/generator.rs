//! PostGenerator trait for the text-generation backend.

use async_trait::async_trait;

use crate::error::GenerateResult;

/// A text-generation backend keyed by a model identifier string.
///
/// One prompt per call, no streaming, no retry. Implementations wrap a
/// specific provider (see [`OllamaGenerator`](crate::generators::OllamaGenerator));
/// the pipeline never depends on provider specifics.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    /// Complete `prompt` with the given model, returning the reply text.
    async fn generate(&self, model: &str, prompt: &str) -> GenerateResult<String>;
}
