//! Content flowing through the per-entity pipeline.

use crate::types::platform::Platform;

/// Readable text extracted from a fetched homepage.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    /// URL the text was extracted from
    pub source_url: String,

    /// Joined block-level text, one fragment per line, in document order
    pub text: String,
}

impl ExtractedContent {
    /// Create extracted content for a URL.
    pub fn new(source_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            text: text.into(),
        }
    }

    /// Whether the extraction produced any usable text.
    ///
    /// Whitespace-only text counts as empty; the orchestrator treats this
    /// as a terminal skip for the entity.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A composed prompt for one platform.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Platform the prompt targets
    pub platform: Platform,

    /// Full prompt text: brand guide, persona block, task block
    pub text: String,
}

/// The result of one generation call.
///
/// Backend failures do not abort the entity: the error description stands
/// in for the post body and `is_error` is set, so the artifact still gets
/// a section for every platform.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    /// Platform this post targets
    pub platform: Platform,

    /// Generated post body, or an `Error: ...` description on failure
    pub content: String,

    /// True when `content` holds an error description instead of a post
    pub is_error: bool,
}

impl GeneratedPost {
    /// A successful generation.
    pub fn ok(platform: Platform, content: impl Into<String>) -> Self {
        Self {
            platform,
            content: content.into(),
            is_error: false,
        }
    }

    /// A failed generation; the cause becomes the section body.
    pub fn error(platform: Platform, cause: impl std::fmt::Display) -> Self {
        Self {
            platform,
            content: format!("Error: {cause}"),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_content_is_empty() {
        let content = ExtractedContent::new("https://example.com", "  \n\t  ");
        assert!(content.is_empty());
    }

    #[test]
    fn test_error_post_carries_prefix() {
        let post = GeneratedPost::error(Platform::X, "connection refused");
        assert!(post.is_error);
        assert_eq!(post.content, "Error: connection refused");
    }
}
