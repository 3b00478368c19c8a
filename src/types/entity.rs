//! Units of work and their terminal outcomes.

use std::path::PathBuf;

/// One (company name, website URL) unit of work.
///
/// Transient: lives only for the duration of one orchestration call and is
/// never persisted as a standalone record. The batch runner guarantees both
/// fields are non-empty after trimming before an entity is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Company name as supplied by the caller
    pub company_name: String,

    /// Homepage URL as supplied by the caller
    pub website_url: String,
}

impl Entity {
    /// Create a new entity.
    pub fn new(company_name: impl Into<String>, website_url: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            website_url: website_url.into(),
        }
    }
}

/// Terminal state of one entity's processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// All four posts were generated and the artifact was written.
    Completed {
        /// Path of the written artifact
        path: PathBuf,
    },

    /// Fetch failed or extraction yielded no text; nothing was written.
    Skipped,

    /// Generation completed but the artifact could not be written.
    Failed,
}

/// The single value returned to the caller per entity.
///
/// `message` is the human-readable status line the batch report is built
/// from; `status` exists so programmatic callers can branch without parsing
/// the message text.
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    /// The entity this outcome belongs to
    pub entity: Entity,

    /// Terminal state
    pub status: OutcomeStatus,

    /// One human-readable status line
    pub message: String,
}

impl ProcessingOutcome {
    /// Outcome for a successfully processed entity.
    pub fn completed(entity: Entity, path: PathBuf) -> Self {
        let message = format!(
            "Successfully processed {}. Posts saved to {}",
            entity.company_name,
            path.display()
        );
        Self {
            entity,
            status: OutcomeStatus::Completed { path },
            message,
        }
    }

    /// Outcome for an entity skipped because no text could be extracted.
    pub fn skipped(entity: Entity) -> Self {
        let message = format!(
            "Skipping {} due to text extraction error.",
            entity.company_name
        );
        Self {
            entity,
            status: OutcomeStatus::Skipped,
            message,
        }
    }

    /// Outcome for an entity whose artifact could not be written.
    pub fn failed(entity: Entity, cause: impl std::fmt::Display) -> Self {
        let message = format!("Failed to write file for {}: {}", entity.company_name, cause);
        Self {
            entity,
            status: OutcomeStatus::Failed,
            message,
        }
    }
}
