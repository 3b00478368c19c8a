//! Batch social-media post generation from company homepages.
//!
//! Given a (company name, website URL) pair, the pipeline fetches the
//! homepage, extracts its readable text, generates four platform-specific
//! posts (Facebook, LinkedIn, X, Instagram) through a text-generation
//! backend, and persists all four to a dated artifact file. Batches of
//! pairs run strictly sequentially.
//!
//! # Failure policy
//!
//! - Fetch failure or empty extraction skips the entity (no file written).
//! - A backend failure on one platform never aborts the entity: the error
//!   text becomes that platform's section and the rest continue.
//! - A write failure marks the entity failed; the batch continues.
//! - Nothing escapes the batch runner as an error — every entity produces
//!   exactly one status line.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spotlight::{run_batch, HttpFetcher, OllamaGenerator, PipelineConfig};
//!
//! let config = PipelineConfig::new().with_model("llama3.1:latest");
//! let fetcher = HttpFetcher::new();
//! let generator = OllamaGenerator::new();
//!
//! let pairs = vec![("Acme Logistics".to_string(), "http://example.com".to_string())];
//! let report = run_batch(&pairs, &config, &fetcher, &generator).await;
//! println!("{report}");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams ([`PageFetcher`], [`PostGenerator`])
//! - [`types`] - Pipeline data types
//! - [`pipeline`] - Orchestration, prompts, persistence, batch runner
//! - [`fetchers`] - HTTP fetcher implementation
//! - [`generators`] - Ollama backend implementation
//! - [`testing`] - Mock implementations for tests

pub mod error;
pub mod extract;
pub mod fetchers;
pub mod generators;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{FetchError, GenerateError, PersistError};
pub use traits::{PageFetcher, PostGenerator};
pub use types::{
    Entity, ExtractedContent, GeneratedPost, OutcomeStatus, PipelineConfig, Platform,
    ProcessingOutcome, Prompt,
};

// Re-export pipeline entry points
pub use pipeline::{
    process_entity, run_batch, run_batch_outcomes, sanitize_company_name, MAX_BATCH_SIZE,
    NO_VALID_ENTRIES,
};

// Re-export extraction helpers
pub use extract::{extract, extract_readable_text};

// Re-export implementations
pub use fetchers::HttpFetcher;
pub use generators::OllamaGenerator;
