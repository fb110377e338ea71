//! The in-page navigation sidebar.
//!
//! Produces, inside the navigation container:
//!
//! ```html
//! <h4><a href="#page-title">Contents</a></h4>
//! <ul>
//!   <li><a href="#section">Section</a></li>
//!   <li><a href="#subsection">Subsection</a></li>
//! </ul>
//! ```
//!
//! Nesting is visual only: `h3` items carry a deeper indent class, the list
//! itself stays flat.

use crate::config::{EnhanceConfig, NavTheme, as_refs};
use crate::slugger::Slugger;
use log::{debug, warn};
use margin_traits::{View, ViewError};
use margin_types::{HeadingLevel, NavEntry, Selector};

pub struct PageNavBuilder {
    slugger: Slugger,
    theme: NavTheme,
    label: String,
    opt_out_attribute: String,
}

impl PageNavBuilder {
    pub fn new(config: &EnhanceConfig) -> Self {
        Self {
            slugger: Slugger::from_config(config),
            theme: config.theme.nav.clone(),
            label: config.nav_label.clone(),
            opt_out_attribute: config.opt_out_attribute.clone(),
        }
    }

    /// Whether a heading has explicitly opted out. Only the exact value
    /// `"false"` opts out.
    pub fn is_opted_out<V: View>(&self, view: &V, heading: &V::Node) -> bool {
        view.has_attribute(heading, &self.opt_out_attribute)
            && view.attribute(heading, &self.opt_out_attribute).as_deref() == Some("false")
    }

    /// Populates `container` and returns the entries it rendered, in document
    /// order.
    pub fn build<V: View>(
        &mut self,
        view: &mut V,
        container: &V::Node,
    ) -> Result<Vec<NavEntry>, ViewError> {
        // Existing ids must be known before any are generated.
        let all_levels = [HeadingLevel::Title, HeadingLevel::Section, HeadingLevel::Subsection];
        for heading in view.query_all(&Selector::any_tag(all_levels.map(HeadingLevel::tag))) {
            if let Some(id) = view.attribute(&heading, "id") {
                self.slugger.reserve(&id);
            }
        }

        view.add_classes(container, &as_refs(&self.theme.container))?;

        match view.query(&Selector::tag(HeadingLevel::Title.tag())) {
            Some(title) => {
                let anchor = self.slugger.ensure_id(view, &title)?;
                let header = view.create_element("h4")?;
                let link = view.create_element("a")?;
                view.set_attribute(&link, "href", &anchor.fragment())?;
                view.add_classes(&header, &as_refs(&self.theme.header))?;
                view.add_classes(&link, &as_refs(&self.theme.header_link))?;
                view.set_text(&link, &self.label)?;
                view.append_child(&header, &link)?;
                view.append_child(container, &header)?;
            }
            None => warn!("Page has no <h1>; navigation will have no title link"),
        }

        let list = view.create_element("ul")?;
        view.add_classes(&list, &as_refs(&self.theme.list))?;
        view.append_child(container, &list)?;

        let mut entries = Vec::new();
        let entry_levels = [HeadingLevel::Section, HeadingLevel::Subsection];
        for heading in view.query_all(&Selector::any_tag(entry_levels.map(HeadingLevel::tag))) {
            if self.is_opted_out(view, &heading) {
                debug!("Skipping opted-out heading '{}'", view.text(&heading));
                continue;
            }
            let Some(level) = HeadingLevel::from_tag(&view.tag_name(&heading)) else {
                continue;
            };

            let target = self.slugger.ensure_id(view, &heading)?;
            let text = view.text(&heading);

            let item = view.create_element("li")?;
            let link = view.create_element("a")?;
            view.set_attribute(&link, "href", &target.fragment())?;
            view.add_classes(&link, &as_refs(&self.theme.link))?;
            view.set_text(&link, &text)?;

            view.add_classes(&item, &as_refs(&self.theme.item))?;
            let indent = match level {
                HeadingLevel::Subsection => &self.theme.subsection_item,
                _ => &self.theme.section_item,
            };
            view.add_classes(&item, &as_refs(indent))?;

            view.append_child(&item, &link)?;
            view.append_child(&list, &item)?;

            entries.push(NavEntry { level, text, target });
        }

        debug!("Built page navigation with {} entries", entries.len());
        Ok(entries)
    }
}
