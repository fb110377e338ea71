use crate::ids::AnchorId;
use serde::{Deserialize, Serialize};

/// The heading tags that take part in page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeadingLevel {
    /// `h1`, the page title.
    Title,
    /// `h2`
    Section,
    /// `h3`
    Subsection,
}

impl HeadingLevel {
    /// Parses a tag name, ignoring ASCII case. Returns `None` for anything
    /// other than `h1`, `h2` or `h3`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("h1") {
            Some(Self::Title)
        } else if tag.eq_ignore_ascii_case("h2") {
            Some(Self::Section)
        } else if tag.eq_ignore_ascii_case("h3") {
            Some(Self::Subsection)
        } else {
            None
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Title => "h1",
            Self::Section => "h2",
            Self::Subsection => "h3",
        }
    }
}

/// One link in the generated page navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    /// Nesting level of the entry (section or subsection).
    pub level: HeadingLevel,
    /// The heading text, used as the link label.
    pub text: String,
    /// The anchor the link points to.
    pub target: AnchorId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_is_case_insensitive() {
        assert_eq!(HeadingLevel::from_tag("H2"), Some(HeadingLevel::Section));
        assert_eq!(HeadingLevel::from_tag("h3"), Some(HeadingLevel::Subsection));
        assert_eq!(HeadingLevel::from_tag("h4"), None);
        assert_eq!(HeadingLevel::from_tag("header"), None);
    }

    #[test]
    fn test_tag_round_trips() {
        for level in [HeadingLevel::Title, HeadingLevel::Section, HeadingLevel::Subsection] {
            assert_eq!(HeadingLevel::from_tag(level.tag()), Some(level));
        }
    }

    #[test]
    fn test_nav_entry_serializes_camel_case() {
        let entry = NavEntry {
            level: HeadingLevel::Subsection,
            text: "Install".to_string(),
            target: AnchorId::new("install"),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], "subsection");
        assert_eq!(json["target"], "install");
    }
}
