//! The per-entity processing pipeline and its batch runner.

pub mod batch;
pub mod persist;
pub mod process;
pub mod prompts;

pub use batch::{run_batch, run_batch_outcomes, MAX_BATCH_SIZE, NO_VALID_ENTRIES};
pub use persist::{artifact_filename, persist, render_artifact, sanitize_company_name};
pub use process::process_entity;
pub use prompts::{compose, excerpt, BRAND_GUIDE};
