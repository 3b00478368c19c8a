//! The fixed set of social-media platforms the pipeline targets.

/// A social-media platform with its own persona and style rules.
///
/// The set is statically known and ordered: generation calls and the
/// sections of the output artifact both follow [`Platform::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    LinkedIn,
    X,
    Instagram,
}

impl Platform {
    /// All platforms in generation and artifact-section order.
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::X,
        Platform::Instagram,
    ];

    /// Human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::X => "X",
            Platform::Instagram => "Instagram",
        }
    }

    /// Section label used in the output artifact header line.
    pub fn section_label(&self) -> &'static str {
        match self {
            Platform::Facebook => "FACEBOOK",
            Platform::LinkedIn => "LINKEDIN",
            Platform::X => "X (TWITTER)",
            Platform::Instagram => "INSTAGRAM",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_order_is_fixed() {
        let names: Vec<_> = Platform::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Facebook", "LinkedIn", "X", "Instagram"]);
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Platform::X.section_label(), "X (TWITTER)");
        assert_eq!(Platform::Facebook.section_label(), "FACEBOOK");
    }
}
