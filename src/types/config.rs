//! Configuration for the spotlight pipeline.

use std::path::PathBuf;

/// Default model identifier for the generation backend.
pub const DEFAULT_MODEL: &str = "llama3.1:latest";

/// Default output directory for artifacts, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Hard character cap on the homepage excerpt embedded in prompts.
pub const DEFAULT_EXCERPT_LIMIT: usize = 1500;

/// Configuration for per-entity processing.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Model identifier passed to the generation backend.
    ///
    /// Treated as an opaque string; the backend is swappable without
    /// pipeline changes. Default: `llama3.1:latest`.
    pub model: String,

    /// Directory artifacts are written to (created if absent).
    pub output_dir: PathBuf,

    /// Maximum number of characters of extracted text embedded in each
    /// prompt. Hard cut, no word-boundary awareness, no truncation marker.
    pub excerpt_limit: usize,

    /// Override for the brand-guide preamble prepended to every prompt.
    ///
    /// When `None`, the built-in guide is used.
    pub brand_guide: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            excerpt_limit: DEFAULT_EXCERPT_LIMIT,
            brand_guide: None,
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the excerpt character limit.
    pub fn with_excerpt_limit(mut self, limit: usize) -> Self {
        self.excerpt_limit = limit;
        self
    }

    /// Override the brand-guide preamble.
    pub fn with_brand_guide(mut self, guide: impl Into<String>) -> Self {
        self.brand_guide = Some(guide.into());
        self
    }
}
