//! JavaScript-facing result types.

use margin_core::{Feature, Installed};
use wasm_bindgen::prelude::*;

/// Which features were attached when `install()` ran. Progress bar and page
/// navigation are decided later, when the document is ready, and are logged.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    menu_toggle: bool,
    header_shrink: bool,
}

#[wasm_bindgen]
impl InstallSummary {
    #[wasm_bindgen(getter, js_name = menuToggle)]
    pub fn menu_toggle(&self) -> bool {
        self.menu_toggle
    }

    #[wasm_bindgen(getter, js_name = headerShrink)]
    pub fn header_shrink(&self) -> bool {
        self.header_shrink
    }
}

impl From<&Installed> for InstallSummary {
    fn from(installed: &Installed) -> Self {
        Self {
            menu_toggle: installed.contains(Feature::MenuToggle),
            header_shrink: installed.contains(Feature::HeaderShrink),
        }
    }
}
