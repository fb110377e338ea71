//! WebAssembly bindings for margin page enhancements.
//!
//! This crate runs the `margin-core` components against the live DOM. It
//! provides [`WebView`], a [`View`](margin_traits::View) over
//! `web_sys::Document`, and [`WebEvents`], an
//! [`EventSource`](margin_traits::EventSource) that installs real listeners.
//!
//! ## Module Structure
//!
//! - [`builder`] - `MarginEnhancer` builder API exported to JavaScript
//! - [`view`] - `View` implementation over `web_sys`
//! - [`events`] - `EventSource` implementation over `addEventListener`
//! - [`error`] - Error types with JavaScript interop
//! - [`types`] - JavaScript-facing result types
//!
//! # Example
//!
//! ```javascript
//! import init, { MarginEnhancer } from '@margin/wasm';
//!
//! await init();
//!
//! const summary = new MarginEnhancer()
//!   .withConfig({ shrinkThreshold: 300 })
//!   .install();
//! console.log(summary.menuToggle, summary.headerShrink);
//! ```
//!
//! Listeners are registered for the lifetime of the page and never removed.

mod builder;
mod error;
mod events;
mod types;
mod view;

pub use builder::MarginEnhancer;
pub use error::{ErrorCode, MarginError};
pub use events::WebEvents;
pub use types::InstallSummary;
pub use view::WebView;

use margin_core::{SlugStyle, slugify as slugify_text};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the margin-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install every enhancement with an optional configuration object.
#[wasm_bindgen]
pub fn enhance(config: JsValue) -> Result<InstallSummary, JsValue> {
    MarginEnhancer::new().with_config(config)?.install()
}

/// The identifier a heading with this text would receive.
#[wasm_bindgen]
pub fn slugify(text: &str, ascii: Option<bool>) -> String {
    let style = if ascii.unwrap_or(false) {
        SlugStyle::Ascii
    } else {
        SlugStyle::Whitespace
    };
    slugify_text(text, style)
}
