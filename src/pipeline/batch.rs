//! Batch runner over (company name, website URL) pairs.

use crate::pipeline::process::process_entity;
use crate::traits::{PageFetcher, PostGenerator};
use crate::types::{Entity, PipelineConfig, ProcessingOutcome};

/// Report returned when no pair survives validation.
pub const NO_VALID_ENTRIES: &str = "No valid company/website entries provided.";

/// Advisory batch bound kept by the CLI front-end.
///
/// The runner itself accepts any slice length; the bound is a
/// presentation-layer limit, not a pipeline invariant.
pub const MAX_BATCH_SIZE: usize = 12;

/// Process a batch, returning one outcome per valid entity in input order.
///
/// Both fields of each pair are trimmed; a pair with an empty field after
/// trimming is silently dropped — not counted, not reported. Valid entities
/// run strictly sequentially.
pub async fn run_batch_outcomes<F, G>(
    entries: &[(String, String)],
    config: &PipelineConfig,
    fetcher: &F,
    generator: &G,
) -> Vec<ProcessingOutcome>
where
    F: PageFetcher,
    G: PostGenerator,
{
    let mut outcomes = Vec::new();

    for (name, url) in entries {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            continue;
        }

        let entity = Entity::new(name, url);
        outcomes.push(process_entity(entity, config, fetcher, generator).await);
    }

    outcomes
}

/// Process a batch and return the combined multi-line report.
///
/// Outcome messages are joined with newlines in input order; a batch with
/// zero valid pairs yields the fixed [`NO_VALID_ENTRIES`] message.
pub async fn run_batch<F, G>(
    entries: &[(String, String)],
    config: &PipelineConfig,
    fetcher: &F,
    generator: &G,
) -> String
where
    F: PageFetcher,
    G: PostGenerator,
{
    let outcomes = run_batch_outcomes(entries, config, fetcher, generator).await;

    if outcomes.is_empty() {
        return NO_VALID_ENTRIES.to_string();
    }

    outcomes
        .iter()
        .map(|o| o.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
