//! Wires the components to an event source.
//!
//! Installation happens in two phases, matching how the page loads:
//!
//! 1. At install time the menu toggle and the header shrink controller are
//!    attached, each only if its elements exist.
//! 2. On [`Event::Ready`] the progress bar is enabled if its element exists
//!    and the page navigation is built if its container exists and the page
//!    has at least one `h2`.
//!
//! A missing element is never an error; the feature is skipped and logged.

use crate::config::EnhanceConfig;
use crate::error::EnhanceError;
use crate::header::HeaderShrink;
use crate::menu::MenuToggle;
use crate::page_nav::PageNavBuilder;
use crate::scroll_progress::ScrollProgress;
use log::{debug, info};
use margin_traits::{Event, EventSource, View, ViewError};
use margin_types::{NavEntry, Selector};
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

/// Number of animated bars inside the menu toggle button.
const MENU_BARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    MenuToggle,
    HeaderShrink,
    ScrollProgress,
    PageNav,
}

/// What the ready handler did, once it has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadyReport {
    pub features: Vec<Feature>,
    pub nav_entries: Vec<NavEntry>,
}

/// Outcome of [`Enhancer::install`].
#[derive(Debug, Default)]
pub struct Installed {
    /// Features attached at install time.
    pub features: Vec<Feature>,
    ready: Rc<RefCell<Option<ReadyReport>>>,
}

impl Installed {
    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// The ready handler's report, or `None` if the document has not
    /// signalled ready yet.
    pub fn ready_report(&self) -> Option<ReadyReport> {
        self.ready.borrow().clone()
    }
}

pub struct Enhancer {
    config: EnhanceConfig,
}

impl Enhancer {
    pub fn new(config: EnhanceConfig) -> Result<Self, EnhanceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }

    /// Registers every applicable handler on `events`.
    pub fn install<V, E>(&self, view: &V, events: &mut E) -> Result<Installed, EnhanceError>
    where
        V: View + 'static,
        V::Node: 'static,
        E: EventSource<V>,
    {
        let mut installed = Installed::default();

        match self.menu_toggle(view) {
            Some(mut menu) => {
                let button = menu.button().clone();
                events.listen(
                    Event::Click(button),
                    Box::new(move |view: &mut V| menu.toggle(view).map(|_| ())),
                )?;
                installed.features.push(Feature::MenuToggle);
            }
            None => debug!(
                "Menu toggle skipped: #{} or #{} not found",
                self.config.ids.nav_toggle, self.config.ids.mobile_menu
            ),
        }

        match self.header_shrink(view) {
            Some(mut header) => {
                events.listen(
                    Event::Scroll,
                    Box::new(move |view: &mut V| header.update(view).map(|_| ())),
                )?;
                installed.features.push(Feature::HeaderShrink);
            }
            None => debug!("Header shrink skipped: #{} not found", self.config.ids.top_bar),
        }

        // Filled by the ready handler; read by the scroll handler.
        let progress_bar: Rc<OnceCell<V::Node>> = Rc::new(OnceCell::new());

        let bar = Rc::clone(&progress_bar);
        events.listen(
            Event::Scroll,
            Box::new(move |view: &mut V| match bar.get() {
                Some(bar) => ScrollProgress::new(bar.clone()).update(view).map(|_| ()),
                None => Ok(()),
            }),
        )?;

        let config = self.config.clone();
        let report = Rc::clone(&installed.ready);
        events.listen(
            Event::Ready,
            Box::new(move |view: &mut V| {
                let outcome = on_ready(view, &config, &progress_bar)?;
                *report.borrow_mut() = Some(outcome);
                Ok(())
            }),
        )?;

        info!("Installed {} features, ready handler pending", installed.features.len());
        Ok(installed)
    }

    fn menu_toggle<V: View>(&self, view: &V) -> Option<MenuToggle<V::Node>> {
        let ids = &self.config.ids;
        let button = view.element_by_id(&ids.nav_toggle)?;
        let panel = view.element_by_id(&ids.mobile_menu)?;
        let bars = view
            .query_all(&Selector::child_of(ids.nav_toggle.as_str(), "div"))
            .into_iter()
            .take(MENU_BARS)
            .collect();
        Some(MenuToggle::new(panel, button, bars, self.config.theme.menu.clone()))
    }

    fn header_shrink<V: View>(&self, view: &V) -> Option<HeaderShrink<V::Node>> {
        let ids = &self.config.ids;
        let bar = view.element_by_id(&ids.top_bar)?;
        let logo = view.query(&Selector::within(ids.top_bar.as_str(), "a"));
        if logo.is_none() {
            debug!("#{} has no link; only the bar will change", ids.top_bar);
        }
        Some(HeaderShrink::new(
            bar,
            logo,
            self.config.shrink_threshold,
            self.config.theme.header.clone(),
        ))
    }
}

fn on_ready<V: View>(
    view: &mut V,
    config: &EnhanceConfig,
    progress_bar: &OnceCell<V::Node>,
) -> Result<ReadyReport, ViewError> {
    let mut report = ReadyReport::default();

    match view.element_by_id(&config.ids.progress) {
        Some(bar) => {
            // A second ready signal keeps the first element.
            let _ = progress_bar.set(bar);
            report.features.push(Feature::ScrollProgress);
        }
        None => debug!("Scroll progress skipped: #{} not found", config.ids.progress),
    }

    match view.element_by_id(&config.ids.page_nav) {
        Some(container) if !view.query_all(&Selector::tag("h2")).is_empty() => {
            report.nav_entries = PageNavBuilder::new(config).build(view, &container)?;
            report.features.push(Feature::PageNav);
        }
        Some(_) => debug!("Page navigation skipped: page has no <h2>"),
        None => debug!("Page navigation skipped: #{} not found", config.ids.page_nav),
    }

    info!("Ready: enabled {:?}", report.features);
    Ok(report)
}
