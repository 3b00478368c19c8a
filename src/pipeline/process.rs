//! Per-entity orchestration.
//!
//! Start → Extracting → (Skipped | Generating → Persisting → Done | Failed),
//! as straight-line async code with early returns. Every path terminates in
//! exactly one [`ProcessingOutcome`]; no error escapes this function.

use chrono::Local;
use tracing::{info, warn};

use crate::extract;
use crate::pipeline::{persist, prompts};
use crate::traits::{PageFetcher, PostGenerator};
use crate::types::{Entity, GeneratedPost, PipelineConfig, Platform, ProcessingOutcome};

/// Process one entity end to end.
///
/// The caller (batch runner) guarantees both entity fields are non-empty
/// after trimming. Generation failures are isolated per platform: the error
/// text stands in for that platform's post and the remaining platforms and
/// persistence still run.
pub async fn process_entity<F, G>(
    entity: Entity,
    config: &PipelineConfig,
    fetcher: &F,
    generator: &G,
) -> ProcessingOutcome
where
    F: PageFetcher,
    G: PostGenerator,
{
    info!(
        company = %entity.company_name,
        url = %entity.website_url,
        "Processing entity"
    );

    let content = match extract::extract(fetcher, &entity.website_url).await {
        Ok(content) => content,
        Err(e) => {
            warn!(
                company = %entity.company_name,
                url = %entity.website_url,
                error = %e,
                "Fetch failed, skipping entity"
            );
            return ProcessingOutcome::skipped(entity);
        }
    };

    if content.is_empty() {
        warn!(
            company = %entity.company_name,
            url = %entity.website_url,
            "Extraction yielded no text, skipping entity"
        );
        return ProcessingOutcome::skipped(entity);
    }

    let excerpt = prompts::excerpt(&content.text, config.excerpt_limit);
    let brand_guide = config
        .brand_guide
        .as_deref()
        .unwrap_or(prompts::BRAND_GUIDE);

    let mut posts = Vec::with_capacity(Platform::ALL.len());
    for platform in Platform::ALL {
        info!(
            platform = %platform,
            company = %entity.company_name,
            "Generating post"
        );

        let prompt = prompts::compose(platform, &entity.company_name, &excerpt, brand_guide);
        let post = match generator.generate(&config.model, &prompt.text).await {
            Ok(content) => GeneratedPost::ok(platform, content),
            Err(e) => {
                warn!(platform = %platform, error = %e, "Generation failed");
                GeneratedPost::error(platform, e)
            }
        };
        posts.push(post);
    }

    let date = Local::now().date_naive();
    match persist::persist(&entity, date, &posts, &config.output_dir).await {
        Ok(path) => ProcessingOutcome::completed(entity, path),
        Err(e) => ProcessingOutcome::failed(entity, e),
    }
}
