//! MarginEnhancer builder for WASM.
//!
//! This module provides the main entry point for JavaScript callers.

use crate::error::MarginError;
use crate::events::WebEvents;
use crate::types::InstallSummary;
use crate::view::WebView;
use margin_core::{EnhanceConfig, Enhancer};
use wasm_bindgen::prelude::*;

/// Configures and installs the page enhancements.
///
/// # Example
///
/// ```javascript
/// new MarginEnhancer()
///   .withConfigJson('{ "ids": { "pageNav": "toc" } }')
///   .install();
/// ```
#[wasm_bindgen]
pub struct MarginEnhancer {
    config: EnhanceConfig,
}

#[wasm_bindgen]
impl MarginEnhancer {
    /// Create a builder with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: EnhanceConfig::default(),
        }
    }

    /// Set the configuration from a JavaScript object. `undefined` and `null`
    /// keep the defaults; missing fields take their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(mut self, config: JsValue) -> Result<MarginEnhancer, JsValue> {
        if config.is_undefined() || config.is_null() {
            return Ok(self);
        }
        let parsed: EnhanceConfig =
            serde_wasm_bindgen::from_value(config).map_err(MarginError::from)?;
        parsed.validate().map_err(MarginError::from)?;
        self.config = parsed;
        Ok(self)
    }

    /// Set the configuration from a JSON string.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(mut self, json: &str) -> Result<MarginEnhancer, JsValue> {
        self.config = EnhanceConfig::from_json(json).map_err(MarginError::from)?;
        Ok(self)
    }

    /// Override the header shrink threshold.
    #[wasm_bindgen(js_name = withShrinkThreshold)]
    pub fn with_shrink_threshold(mut self, threshold: f64) -> Result<MarginEnhancer, JsValue> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(MarginError::config(format!(
                "shrink threshold must be a non-negative number, got {}",
                threshold
            ))
            .into());
        }
        self.config.shrink_threshold = threshold;
        Ok(self)
    }

    /// Attach every enhancement whose elements are present on the page.
    #[wasm_bindgen]
    pub fn install(&self) -> Result<InstallSummary, JsValue> {
        let view = WebView::from_window()?;
        let mut events = WebEvents::new(&view);
        let enhancer = Enhancer::new(self.config.clone()).map_err(MarginError::from)?;
        let installed = enhancer
            .install(&view, &mut events)
            .map_err(MarginError::from)?;
        Ok(InstallSummary::from(&installed))
    }
}

impl Default for MarginEnhancer {
    fn default() -> Self {
        Self::new()
    }
}
