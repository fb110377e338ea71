//! Running the enhancements without a browser.
//!
//! [`OfflinePage`] loads an XHTML page into a [`Document`], installs the
//! enhancements through the regular bootstrap and lets the caller fire the
//! ready, scroll and click events by hand.

use crate::error::RunError;
use log::info;
use margin_core::{EnhanceConfig, Enhancer, Installed, ReadyReport};
use margin_dom::Document;
use margin_traits::{SimulatedEvents, View};
use margin_types::{NavEntry, ScrollMetrics};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// The generated navigation of a page.
#[derive(Debug, Clone, Serialize)]
pub struct NavOutput {
    /// The populated navigation container, serialized.
    pub html: String,
    pub entries: Vec<NavEntry>,
}

pub struct OfflinePage {
    doc: Document,
    events: SimulatedEvents<Document>,
    installed: Installed,
    config: EnhanceConfig,
}

impl OfflinePage {
    pub fn from_document(doc: Document, config: EnhanceConfig) -> Result<Self, RunError> {
        let enhancer = Enhancer::new(config.clone())?;
        let mut events = SimulatedEvents::new();
        let installed = enhancer.install(&doc, &mut events)?;
        Ok(Self {
            doc,
            events,
            installed,
            config,
        })
    }

    pub fn load(xhtml: &str, config: EnhanceConfig) -> Result<Self, RunError> {
        Self::from_document(Document::parse_xhtml(xhtml)?, config)
    }

    pub fn from_file(path: impl AsRef<Path>, config: EnhanceConfig) -> Result<Self, RunError> {
        let path = path.as_ref();
        info!("Loading page from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::load(&text, config)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn installed(&self) -> &Installed {
        &self.installed
    }

    /// Signals that the document is ready and returns what the ready handler
    /// enabled.
    pub fn ready(&mut self) -> Option<ReadyReport> {
        self.events.fire_ready(&mut self.doc);
        self.installed.ready_report()
    }

    /// Sets the simulated content and viewport heights, keeping the current
    /// scroll offset. A freshly loaded page has both at zero, so the progress
    /// bar stays at `0%` until this is called.
    pub fn set_page_size(&mut self, content_height: f64, viewport_height: f64) {
        let scroll_top = self.doc.scroll_metrics().scroll_top;
        self.doc.set_scroll(ScrollMetrics::new(scroll_top, content_height, viewport_height));
    }

    /// Moves the simulated scroll position and dispatches a scroll event.
    pub fn scroll_to(&mut self, offset: f64) {
        self.doc.set_scroll_top(offset);
        self.events.fire_scroll(&mut self.doc);
    }

    /// Dispatches a click on the element with the given id.
    pub fn click(&mut self, id: &str) -> Result<(), RunError> {
        let target = self
            .doc
            .element_by_id(id)
            .ok_or_else(|| RunError::MissingElement(id.to_string()))?;
        self.events.fire_click(&mut self.doc, &target);
        Ok(())
    }

    /// Fires the ready event if it has not run yet and returns the populated
    /// navigation container.
    pub fn nav_output(&mut self) -> Result<NavOutput, RunError> {
        let report = match self.installed.ready_report() {
            Some(report) => report,
            None => self.ready().unwrap_or_default(),
        };
        let id = &self.config.ids.page_nav;
        let container = self
            .doc
            .element_by_id(id)
            .ok_or_else(|| RunError::MissingElement(id.clone()))?;
        Ok(NavOutput {
            html: self.doc.to_html(container),
            entries: report.nav_entries,
        })
    }

    /// The whole page, serialized.
    pub fn to_html(&self) -> String {
        self.doc.to_html(self.doc.root())
    }
}
