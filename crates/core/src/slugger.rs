//! Heading identifiers.

use crate::config::{DuplicatePolicy, EnhanceConfig, SlugStyle};
use log::debug;
use margin_traits::{View, ViewError};
use margin_types::AnchorId;
use std::collections::HashSet;

/// Derives an identifier from heading text.
///
/// With [`SlugStyle::Whitespace`] every run of whitespace, including one at
/// either end, becomes a single `-` and the result is lower-cased:
/// `"Getting  Started"` becomes `"getting-started"`.
pub fn slugify(text: &str, style: SlugStyle) -> String {
    match style {
        SlugStyle::Whitespace => {
            let mut out = String::with_capacity(text.len());
            let mut in_whitespace = false;
            for c in text.chars() {
                if c.is_whitespace() {
                    if !in_whitespace {
                        out.push('-');
                    }
                    in_whitespace = true;
                } else {
                    out.extend(c.to_lowercase());
                    in_whitespace = false;
                }
            }
            out
        }
        SlugStyle::Ascii => slug::slugify(text),
    }
}

/// Assigns identifiers to headings, tracking the ones already handed out.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    style: SlugStyle,
    policy: DuplicatePolicy,
    taken: HashSet<String>,
}

impl Slugger {
    pub fn new(style: SlugStyle, policy: DuplicatePolicy) -> Self {
        Self {
            style,
            policy,
            taken: HashSet::new(),
        }
    }

    pub fn from_config(config: &EnhanceConfig) -> Self {
        Self::new(config.slug_style, config.duplicate_ids)
    }

    /// Marks an identifier that already exists on the page as taken.
    pub fn reserve(&mut self, id: &str) {
        self.taken.insert(id.to_string());
    }

    /// Produces the identifier for `text` under the configured policy and
    /// records it as taken.
    pub fn slug(&mut self, text: &str) -> AnchorId {
        let base = slugify(text, self.style);
        let id = match self.policy {
            DuplicatePolicy::Preserve => base,
            DuplicatePolicy::Suffix => {
                let mut candidate = base.clone();
                let mut n = 2;
                while self.taken.contains(&candidate) {
                    candidate = format!("{}-{}", base, n);
                    n += 1;
                }
                candidate
            }
        };
        self.taken.insert(id.clone());
        AnchorId::from(id)
    }

    /// Returns the heading's identifier, assigning one from its text if it
    /// has none. An existing `id` attribute is returned untouched.
    pub fn ensure_id<V: View>(
        &mut self,
        view: &mut V,
        heading: &V::Node,
    ) -> Result<AnchorId, ViewError> {
        if let Some(existing) = view.attribute(heading, "id") {
            self.reserve(&existing);
            return Ok(AnchorId::from(existing));
        }
        let id = self.slug(&view.text(heading));
        debug!("Assigned id '{}' to <{}>", id, view.tag_name(heading));
        view.set_attribute(heading, "id", id.as_str())?;
        Ok(id)
    }
}
