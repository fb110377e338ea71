//! Scroll-triggered header shrinking.

use crate::config::{HeaderTheme, as_refs};
use log::debug;
use margin_traits::{View, ViewError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Expanded,
    Shrunk,
}

impl HeaderState {
    /// `Shrunk` only when `offset` is strictly past `threshold`.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderState::Shrunk
        } else {
            HeaderState::Expanded
        }
    }
}

/// Swaps the top bar and logo classes as the page crosses the threshold.
///
/// The last applied state is remembered so repeated scroll events on the same
/// side of the threshold do not touch the DOM. The first update always
/// applies.
#[derive(Debug, Clone)]
pub struct HeaderShrink<N> {
    bar: N,
    logo: Option<N>,
    threshold: f64,
    theme: HeaderTheme,
    applied: Option<HeaderState>,
}

impl<N: Clone> HeaderShrink<N> {
    pub fn new(bar: N, logo: Option<N>, threshold: f64, theme: HeaderTheme) -> Self {
        Self {
            bar,
            logo,
            threshold,
            theme,
            applied: None,
        }
    }

    /// The state currently reflected in the DOM, if any update has run.
    pub fn state(&self) -> Option<HeaderState> {
        self.applied
    }

    pub fn update<V: View<Node = N>>(&mut self, view: &mut V) -> Result<HeaderState, ViewError> {
        let state = HeaderState::for_offset(view.scroll_metrics().scroll_top, self.threshold);
        if self.applied == Some(state) {
            return Ok(state);
        }
        self.apply(view, state)?;
        debug!("Header {:?}", state);
        self.applied = Some(state);
        Ok(state)
    }

    fn apply<V: View<Node = N>>(&self, view: &mut V, state: HeaderState) -> Result<(), ViewError> {
        let bar_shrunk = as_refs(&self.theme.bar_shrunk);
        let logo_expanded = as_refs(&self.theme.logo_expanded);
        let logo_shrunk = as_refs(&self.theme.logo_shrunk);
        match state {
            HeaderState::Shrunk => {
                view.add_classes(&self.bar, &bar_shrunk)?;
                if let Some(logo) = &self.logo {
                    view.remove_classes(logo, &logo_expanded)?;
                    view.add_classes(logo, &logo_shrunk)?;
                }
            }
            HeaderState::Expanded => {
                view.remove_classes(&self.bar, &bar_shrunk)?;
                if let Some(logo) = &self.logo {
                    view.remove_classes(logo, &logo_shrunk)?;
                    view.add_classes(logo, &logo_expanded)?;
                }
            }
        }
        Ok(())
    }
}
