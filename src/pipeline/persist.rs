//! Durable persistence of generated posts.
//!
//! One artifact per entity per day: `{sanitized name}_{YYYYMMDD}.txt` under
//! the output directory. Two names that sanitize to the same string on the
//! same day overwrite each other; at most one file per name per day is the
//! documented invariant. The write goes through a temp file and a rename so
//! no partial artifact is ever visible at the final path.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::{PersistError, PersistResult};
use crate::types::{Entity, GeneratedPost};

/// Sanitize a company name for use in a filename.
///
/// Keeps alphanumeric characters, spaces, hyphens, and underscores; strips
/// leading and trailing whitespace. Idempotent.
pub fn sanitize_company_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build the artifact filename for an entity on a given date.
pub fn artifact_filename(company_name: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}.txt",
        sanitize_company_name(company_name),
        date.format("%Y%m%d")
    )
}

/// Render the artifact body: company header, then one labeled section per
/// platform in generation order. Error text stands in for a failed post.
pub fn render_artifact(entity: &Entity, posts: &[GeneratedPost]) -> String {
    let mut body = format!(
        "Company: {}\nWebsite: {}\n\n",
        entity.company_name, entity.website_url
    );

    for post in posts {
        body.push_str(&format!(
            "=== {} POST ===\n{}\n\n",
            post.platform.section_label(),
            post.content
        ));
    }

    body
}

/// Write the artifact for an entity, returning the final path.
///
/// Creates the output directory if absent. The body is written to
/// `{path}.tmp` and renamed into place, so an I/O failure never leaves a
/// partial file at the returned path.
pub async fn persist(
    entity: &Entity,
    date: NaiveDate,
    posts: &[GeneratedPost],
    output_dir: &Path,
) -> PersistResult<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| PersistError::DirectoryCreation {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

    let path = output_dir.join(artifact_filename(&entity.company_name, date));
    let temp_path = path.with_extension("txt.tmp");
    let body = render_artifact(entity, posts);

    if let Err(e) = tokio::fs::write(&temp_path, &body).await {
        error!(path = %temp_path.display(), error = %e, "Artifact write failed");
        return Err(PersistError::FileWrite {
            path: temp_path,
            source: e,
        });
    }

    if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
        error!(
            from = %temp_path.display(),
            to = %path.display(),
            error = %e,
            "Artifact rename failed"
        );
        return Err(PersistError::Rename {
            from: temp_path,
            to: path,
            source: e,
        });
    }

    info!(
        company = %entity.company_name,
        path = %path.display(),
        "Posts saved"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    #[test]
    fn test_sanitize_strips_punctuation() {
        assert_eq!(sanitize_company_name("Acme, Inc."), "Acme Inc");
        assert_eq!(sanitize_company_name("  A/B Testing Co.  "), "AB Testing Co");
    }

    #[test]
    fn test_sanitize_keeps_hyphen_underscore_space() {
        assert_eq!(sanitize_company_name("north-star_freight co"), "north-star_freight co");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize_company_name("Über Haulers & Sons!");
        assert_eq!(sanitize_company_name(&once), once);
    }

    #[test]
    fn test_artifact_filename_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(
            artifact_filename("Acme Logistics", date),
            "Acme Logistics_20260829.txt"
        );
    }

    #[test]
    fn test_render_artifact_section_order() {
        let entity = Entity::new("Acme", "http://example.com");
        let posts: Vec<_> = Platform::ALL
            .iter()
            .map(|&p| GeneratedPost::ok(p, format!("{p} post body")))
            .collect();

        let body = render_artifact(&entity, &posts);

        assert!(body.starts_with("Company: Acme\nWebsite: http://example.com\n\n"));
        let fb = body.find("=== FACEBOOK POST ===").unwrap();
        let li = body.find("=== LINKEDIN POST ===").unwrap();
        let x = body.find("=== X (TWITTER) POST ===").unwrap();
        let ig = body.find("=== INSTAGRAM POST ===").unwrap();
        assert!(fb < li && li < x && x < ig);
        assert!(body.contains("X post body"));
    }

    #[tokio::test]
    async fn test_persist_writes_file_and_cleans_temp() {
        let dir = tempfile::tempdir().unwrap();
        let entity = Entity::new("Acme", "http://example.com");
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let posts = vec![GeneratedPost::ok(Platform::Facebook, "body")];

        let path = persist(&entity, date, &posts, dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join("Acme_20260829.txt"));
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("=== FACEBOOK POST ===\nbody"));
        assert!(!dir.path().join("Acme_20260829.txt.tmp").exists());
    }

    #[tokio::test]
    async fn test_persist_overwrites_same_day_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let entity = Entity::new("Acme", "http://example.com");
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

        let first = vec![GeneratedPost::ok(Platform::Facebook, "first")];
        let second = vec![GeneratedPost::ok(Platform::Facebook, "second")];

        persist(&entity, date, &first, dir.path()).await.unwrap();
        let path = persist(&entity, date, &second, dir.path()).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("second"));
        assert!(!written.contains("first"));
    }
}
