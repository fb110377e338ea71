//! The mobile menu toggle.
//!
//! The toggle button holds three bars that animate into an "X" while the
//! menu is open.

use crate::config::{MenuTheme, as_refs};
use log::debug;
use margin_traits::{View, ViewError};

pub(crate) const BUTTON_OPEN: &str = "rotate(360deg)";
pub(crate) const BUTTON_CLOSED: &str = "rotate(0deg)";
pub(crate) const TOP_BAR_OPEN: &str = "translateY(16px) rotate(-45deg)";
pub(crate) const BOTTOM_BAR_OPEN: &str = "translateY(-16px) rotate(45deg)";
pub(crate) const BAR_CLOSED: &str = "translateY(0) rotate(0deg)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Hidden,
    Visible,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Hidden => MenuState::Visible,
            MenuState::Visible => MenuState::Hidden,
        }
    }
}

/// Owns the menu's open/closed state. Only [`toggle`](Self::toggle) changes it.
#[derive(Debug, Clone)]
pub struct MenuToggle<N> {
    panel: N,
    button: N,
    bars: Vec<N>,
    theme: MenuTheme,
    state: MenuState,
}

impl<N: Clone> MenuToggle<N> {
    /// `bars` are the button's animated children, top to bottom. Bars beyond
    /// the third are ignored; missing ones are skipped.
    pub fn new(panel: N, button: N, bars: Vec<N>, theme: MenuTheme) -> Self {
        Self {
            panel,
            button,
            bars,
            theme,
            state: MenuState::Hidden,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn button(&self) -> &N {
        &self.button
    }

    /// Flips the menu and applies the matching visuals. The stored state only
    /// changes once every write has succeeded.
    pub fn toggle<V: View<Node = N>>(&mut self, view: &mut V) -> Result<MenuState, ViewError> {
        let next = self.state.toggled();
        self.apply(view, next)?;
        debug!("Menu {:?}", next);
        self.state = next;
        Ok(next)
    }

    fn apply<V: View<Node = N>>(&self, view: &mut V, state: MenuState) -> Result<(), ViewError> {
        let hidden = as_refs(&self.theme.panel_hidden);
        let visible = as_refs(&self.theme.panel_visible);
        let (remove, add, button, top, middle_opacity, bottom) = match state {
            MenuState::Visible => (hidden, visible, BUTTON_OPEN, TOP_BAR_OPEN, "0", BOTTOM_BAR_OPEN),
            MenuState::Hidden => (visible, hidden, BUTTON_CLOSED, BAR_CLOSED, "1", BAR_CLOSED),
        };

        view.remove_classes(&self.panel, &remove)?;
        view.add_classes(&self.panel, &add)?;
        view.set_style_property(&self.button, "transform", button)?;
        if let Some(bar) = self.bars.first() {
            view.set_style_property(bar, "transform", top)?;
        }
        if let Some(bar) = self.bars.get(1) {
            view.set_style_property(bar, "opacity", middle_opacity)?;
        }
        if let Some(bar) = self.bars.get(2) {
            view.set_style_property(bar, "transform", bottom)?;
        }
        Ok(())
    }
}
