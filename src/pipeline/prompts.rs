//! Prompt construction for the four platform posts.
//!
//! Every prompt concatenates, in fixed order: the brand-guide preamble, the
//! platform's persona-and-style block, then a task block naming the company
//! and embedding a bounded excerpt of its homepage text. The style
//! constraints are advisory text for the model; nothing validates the
//! generated output against them.

use crate::types::{Platform, Prompt};

/// Built-in brand-guide preamble, used when the config supplies no override.
pub const BRAND_GUIDE: &str = "\
Brand Guide (Summary):
- Mission: Empower marketing and sales professionals in transportation and logistics
- Tone: Professional, approachable, industry-specific, inspirational, collaborative
- Goal: Highlight member companies, build thought leadership, foster community
";

/// Facebook persona and style rules.
pub const FACEBOOK_PERSONA: &str = "\
As the Facebook Coordinator, you are adept at creating engaging Facebook posts that drive engagement.
You're focused on fostering a sense of community and maximizing engagement on Facebook.
Use short sentences. Each post should be between 50 to 150 words, with high perplexity and burstiness.
Write one-sentence paragraphs. Include a call to action that encourages community interaction.
Include 3 to 5 hashtags, and 1 to 5 emojis.
";

/// LinkedIn persona and style rules.
pub const LINKEDIN_PERSONA: &str = "\
As the LinkedIn Coordinator, you specialize in crafting professional posts that resonate with a business audience.
Length: 100-150 words. Use short sentences. Write with high perplexity and burstiness.
One-sentence paragraphs. Include a call to action for engagement or traffic.
Include 3 to 5 hashtags, and 1 to 5 emojis.
Ensure professional tone and alignment with the brand guide.
";

/// X persona and style rules.
pub const X_PERSONA: &str = "\
As the X Coordinator, you craft concise tweets that spark engagement.
35 words max, under 280 characters.
Include relevant hashtags and a call to action.
Tone: informal and conversational.
";

/// Instagram persona and style rules.
pub const INSTAGRAM_PERSONA: &str = "\
As the Instagram Coordinator, you focus on visual storytelling to drive engagement.
Create a visually engaging caption that aligns with the brand identity.
Include a compelling CTA and maintain a brand-consistent style.
Consider typical Instagram dimensions and best practices.
";

impl Platform {
    /// Persona-and-style block for this platform.
    pub fn persona(&self) -> &'static str {
        match self {
            Platform::Facebook => FACEBOOK_PERSONA,
            Platform::LinkedIn => LINKEDIN_PERSONA,
            Platform::X => X_PERSONA,
            Platform::Instagram => INSTAGRAM_PERSONA,
        }
    }

    /// Task instruction naming the company, appended after the excerpt.
    fn task(&self, company_name: &str) -> String {
        match self {
            Platform::Facebook => format!(
                "Task: Write an engaging Facebook post (50-150 words) featuring {company_name}.\n\
                 Make sure it aligns with the brand guide and fosters a sense of community on Facebook."
            ),
            Platform::LinkedIn => format!(
                "Task: Write a professional LinkedIn post (100-150 words) featuring {company_name}.\n\
                 Adhere to the brand guide, using SEO keywords and a call to action."
            ),
            Platform::X => format!(
                "Task: Write a short, impactful tweet (max 35 words) featuring {company_name}.\n\
                 Include at least one relevant hashtag, a call to action, and ensure it fits X's character limits."
            ),
            Platform::Instagram => format!(
                "Task: Write an Instagram caption that highlights {company_name}.\n\
                 Use a visually descriptive, upbeat tone, and end with a CTA for followers to engage."
            ),
        }
    }
}

/// Truncate extracted text to the first `limit` characters.
///
/// Hard cut on a character boundary; the remainder is silently dropped and
/// no truncation marker is inserted.
pub fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Compose the prompt for one platform.
pub fn compose(
    platform: Platform,
    company_name: &str,
    content_excerpt: &str,
    brand_guide: &str,
) -> Prompt {
    let text = format!(
        "{brand_guide}\n{persona}\n\nCompany: {company_name}\nHomepage snippet: {content_excerpt}\n\n{task}\n",
        persona = platform.persona(),
        task = platform.task(company_name),
    );

    Prompt { platform, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_hard_cut_at_limit() {
        let text = "a".repeat(2000);
        let cut = excerpt(&text, 1500);
        assert_eq!(cut.len(), 1500);
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(excerpt(&text, 4).chars().count(), 4);
    }

    #[test]
    fn test_excerpt_shorter_than_limit_is_unchanged() {
        assert_eq!(excerpt("short", 1500), "short");
    }

    #[test]
    fn test_compose_block_order() {
        let prompt = compose(Platform::Facebook, "Acme Logistics", "We move freight.", BRAND_GUIDE);

        let guide_pos = prompt.text.find("Brand Guide").unwrap();
        let persona_pos = prompt.text.find("Facebook Coordinator").unwrap();
        let company_pos = prompt.text.find("Company: Acme Logistics").unwrap();
        let task_pos = prompt.text.find("Task:").unwrap();

        assert!(guide_pos < persona_pos);
        assert!(persona_pos < company_pos);
        assert!(company_pos < task_pos);
        assert!(prompt.text.contains("Homepage snippet: We move freight."));
    }

    #[test]
    fn test_compose_uses_supplied_brand_guide() {
        let prompt = compose(Platform::X, "Acme", "snippet", "Custom guide\n");
        assert!(prompt.text.starts_with("Custom guide"));
        assert!(!prompt.text.contains("Brand Guide (Summary)"));
    }

    #[test]
    fn test_each_platform_has_distinct_persona() {
        let personas: Vec<_> = Platform::ALL.iter().map(|p| p.persona()).collect();
        for (i, a) in personas.iter().enumerate() {
            for b in personas.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
