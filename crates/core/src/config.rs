//! Configuration for the enhancement layer.
//!
//! Every field has a default matching the site's markup, so an empty JSON
//! object (or no configuration at all) reproduces the stock behavior.

use crate::error::EnhanceError;
use serde::{Deserialize, Serialize};

/// How heading text is turned into an identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlugStyle {
    /// Whitespace runs become a single hyphen, then the text is lower-cased.
    /// Punctuation and non-ASCII characters are kept.
    #[default]
    Whitespace,
    /// Strict ASCII slug (`a-z`, `0-9`, `-`) produced by the `slug` crate.
    Ascii,
}

/// What to do when a generated identifier is already taken on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Emit the identifier anyway. Links to the later heading then resolve to
    /// the earlier one.
    #[default]
    Preserve,
    /// Append `-2`, `-3`, ... until the identifier is unused.
    Suffix,
}

/// The `id` attributes of the elements the enhancements attach to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub progress: String,
    pub page_nav: String,
    pub top_bar: String,
    pub nav_toggle: String,
    pub mobile_menu: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            progress: "progress".to_string(),
            page_nav: "page-nav".to_string(),
            top_bar: "top-bar".to_string(),
            nav_toggle: "nav-toggle".to_string(),
            mobile_menu: "mobile-menu".to_string(),
        }
    }
}

/// Classes applied to the generated navigation markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavTheme {
    pub container: Vec<String>,
    pub header: Vec<String>,
    pub header_link: Vec<String>,
    pub list: Vec<String>,
    /// Applied to every list item.
    pub item: Vec<String>,
    /// Added to `h2` items.
    pub section_item: Vec<String>,
    /// Added to `h3` items.
    pub subsection_item: Vec<String>,
    pub link: Vec<String>,
}

impl Default for NavTheme {
    fn default() -> Self {
        Self {
            container: classes(&["text-zinc-300"]),
            header: classes(&["text-xl", "mt-0", "mb-1"]),
            header_link: classes(&["font-bold", "no-underline", "text-zinc-300"]),
            list: classes(&["ml-1", "my-0", "px-0", "list-none", "leading-none"]),
            item: classes(&["my-0", "pb-1", "text-lg", "border-l-2", "border-zinc-600"]),
            section_item: classes(&["pl-3"]),
            subsection_item: classes(&["pl-5", "text-base", "text-zinc-400"]),
            link: classes(&["no-underline", "font-normal", "text-inherit", "visited:text-inherit"]),
        }
    }
}

/// Classes swapped by the header shrink controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderTheme {
    /// Present on the top bar only while shrunk.
    pub bar_shrunk: Vec<String>,
    pub logo_expanded: Vec<String>,
    pub logo_shrunk: Vec<String>,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            bar_shrunk: classes(&["py-3"]),
            logo_expanded: classes(&["w-16", "h-16", "p-4"]),
            logo_shrunk: classes(&["w-12", "h-12", "p-3"]),
        }
    }
}

/// Classes swapped on the mobile menu panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuTheme {
    pub panel_hidden: Vec<String>,
    pub panel_visible: Vec<String>,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            panel_hidden: classes(&["-translate-x-full"]),
            panel_visible: classes(&["translate-x-0"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub nav: NavTheme,
    pub header: HeaderTheme,
    pub menu: MenuTheme,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhanceConfig {
    pub ids: ElementIds,
    /// Headings with this attribute set to `"false"` are left out of the
    /// page navigation.
    pub opt_out_attribute: String,
    /// Scroll offset above which the header shrinks.
    pub shrink_threshold: f64,
    /// Label of the link to the page title.
    pub nav_label: String,
    pub slug_style: SlugStyle,
    pub duplicate_ids: DuplicatePolicy,
    pub theme: Theme,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            opt_out_attribute: "data-page-nav".to_string(),
            shrink_threshold: 500.0,
            nav_label: "Contents".to_string(),
            slug_style: SlugStyle::default(),
            duplicate_ids: DuplicatePolicy::default(),
            theme: Theme::default(),
        }
    }
}

impl EnhanceConfig {
    /// Parses and validates a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, EnhanceError> {
        let config: EnhanceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EnhanceError> {
        let ids = [
            ("progress", &self.ids.progress),
            ("pageNav", &self.ids.page_nav),
            ("topBar", &self.ids.top_bar),
            ("navToggle", &self.ids.nav_toggle),
            ("mobileMenu", &self.ids.mobile_menu),
        ];
        for (field, value) in ids {
            if value.trim().is_empty() {
                return Err(EnhanceError::Config(format!("ids.{} must not be empty", field)));
            }
            if !is_css_identifier(value) {
                return Err(EnhanceError::Config(format!(
                    "ids.{} must be a plain CSS identifier: '{}'",
                    field, value
                )));
            }
        }
        if self.opt_out_attribute.trim().is_empty() {
            return Err(EnhanceError::Config("optOutAttribute must not be empty".to_string()));
        }
        if !self.shrink_threshold.is_finite() || self.shrink_threshold < 0.0 {
            return Err(EnhanceError::Config(format!(
                "shrinkThreshold must be a non-negative number, got {}",
                self.shrink_threshold
            )));
        }
        Ok(())
    }
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Borrows a class set in the shape `View` expects.
pub(crate) fn as_refs(classes: &[String]) -> Vec<&str> {
    classes.iter().map(String::as_str).collect()
}

/// Whether `id` can be written after `#` in a selector without escaping:
/// ASCII letters, digits, `-`, `_` and non-ASCII characters, not starting with
/// a digit or with `-` followed by a digit.
fn is_css_identifier(id: &str) -> bool {
    let valid_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();
    let mut chars = id.chars();
    let starts_ok = match (chars.next(), chars.next()) {
        (None, _) | (Some('-'), None) => false,
        (Some(first), _) if first.is_ascii_digit() => false,
        (Some('-'), Some(second)) => !second.is_ascii_digit(),
        _ => true,
    };
    starts_ok && id.chars().all(valid_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = EnhanceConfig::from_json("{}").unwrap();
        assert_eq!(config, EnhanceConfig::default());
        assert_eq!(config.shrink_threshold, 500.0);
        assert_eq!(config.ids.page_nav, "page-nav");
    }

    #[test]
    fn test_partial_override() {
        let config = EnhanceConfig::from_json(
            r#"{
                "ids": { "pageNav": "toc" },
                "shrinkThreshold": 120,
                "slugStyle": "ascii",
                "duplicateIds": "suffix",
                "theme": { "header": { "barShrunk": ["py-1"] } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.ids.page_nav, "toc");
        assert_eq!(config.ids.progress, "progress");
        assert_eq!(config.shrink_threshold, 120.0);
        assert_eq!(config.slug_style, SlugStyle::Ascii);
        assert_eq!(config.duplicate_ids, DuplicatePolicy::Suffix);
        assert_eq!(config.theme.header.bar_shrunk, vec!["py-1"]);
        assert_eq!(config.theme.header.logo_shrunk, vec!["w-12", "h-12", "p-3"]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EnhanceConfig::from_json(r#"{ "ids": { "topBar": " " } }"#),
            Err(EnhanceError::Config(_))
        ));
        assert!(matches!(
            EnhanceConfig::from_json(r#"{ "ids": { "topBar": "top bar" } }"#),
            Err(EnhanceError::Config(_))
        ));
        assert!(matches!(
            EnhanceConfig::from_json(r#"{ "shrinkThreshold": -1 }"#),
            Err(EnhanceError::Config(_))
        ));
        assert!(matches!(
            EnhanceConfig::from_json(r#"{ "slugStyle": "kebab" }"#),
            Err(EnhanceError::Json(_))
        ));
    }

    #[test]
    fn test_ids_must_be_selector_safe() {
        for id in ["1nav", "a.b", "nav#x", "-2col", "-", "toc:top"] {
            let json = format!(r#"{{ "ids": {{ "pageNav": "{}" }} }}"#, id);
            assert!(
                matches!(EnhanceConfig::from_json(&json), Err(EnhanceError::Config(_))),
                "{} should be rejected",
                id
            );
        }
        for id in ["page-nav", "_toc", "-toc", "nav2", "inhalt-ü"] {
            let json = format!(r#"{{ "ids": {{ "pageNav": "{}" }} }}"#, id);
            assert!(EnhanceConfig::from_json(&json).is_ok(), "{} should be accepted", id);
        }
    }
}
