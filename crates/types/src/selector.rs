use std::fmt;

/// The element queries the enhancement components need.
///
/// Far smaller than CSS: every query used by the components maps onto one of
/// these shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// A single tag name, e.g. `h2`.
    Tag(String),
    /// Any of several tag names, e.g. `h2, h3`, matched in document order.
    AnyTag(Vec<String>),
    /// `#ancestor_id tag`: descendants of the element with the given id.
    Within { ancestor_id: String, tag: String },
    /// `#parent_id > tag`: direct children of the element with the given id.
    ChildOf { parent_id: String, tag: String },
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn any_tag<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyTag(tags.into_iter().map(Into::into).collect())
    }

    pub fn within(ancestor_id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::Within {
            ancestor_id: ancestor_id.into(),
            tag: tag.into(),
        }
    }

    pub fn child_of(parent_id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::ChildOf {
            parent_id: parent_id.into(),
            tag: tag.into(),
        }
    }

    /// Whether an element with `tag` satisfies the tag part of this selector.
    /// `Id` selectors never match on tag alone.
    pub fn matches_tag(&self, tag: &str) -> bool {
        match self {
            Self::Id(_) => false,
            Self::Tag(t) | Self::Within { tag: t, .. } | Self::ChildOf { tag: t, .. } => {
                t.eq_ignore_ascii_case(tag)
            }
            Self::AnyTag(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(tag)),
        }
    }
}

impl fmt::Display for Selector {
    /// Renders the equivalent CSS selector string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Tag(tag) => write!(f, "{}", tag),
            Self::AnyTag(tags) => write!(f, "{}", tags.join(", ")),
            Self::Within { ancestor_id, tag } => write!(f, "#{} {}", ancestor_id, tag),
            Self::ChildOf { parent_id, tag } => write!(f, "#{} > {}", parent_id, tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rendering() {
        assert_eq!(Selector::id("page-nav").to_string(), "#page-nav");
        assert_eq!(Selector::any_tag(["h2", "h3"]).to_string(), "h2, h3");
        assert_eq!(Selector::within("nav-toggle", "div").to_string(), "#nav-toggle div");
        assert_eq!(Selector::child_of("nav-toggle", "div").to_string(), "#nav-toggle > div");
    }

    #[test]
    fn test_matches_tag() {
        assert!(Selector::any_tag(["h2", "h3"]).matches_tag("H3"));
        assert!(!Selector::tag("h2").matches_tag("h3"));
        assert!(!Selector::id("h2").matches_tag("h2"));
    }
}
