//! Data types for the spotlight pipeline.

pub mod config;
pub mod content;
pub mod entity;
pub mod platform;

pub use config::{PipelineConfig, DEFAULT_EXCERPT_LIMIT, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR};
pub use content::{ExtractedContent, GeneratedPost, Prompt};
pub use entity::{Entity, OutcomeStatus, ProcessingOutcome};
pub use platform::Platform;
