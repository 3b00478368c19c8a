//! Trait abstractions at the pipeline's collaborator seams.

pub mod fetcher;
pub mod generator;

pub use fetcher::PageFetcher;
pub use generator::PostGenerator;
