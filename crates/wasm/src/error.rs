//! Error handling for WASM bindings.
//!
//! Converts margin's error types into JavaScript-friendly errors.

use margin_core::EnhanceError;
use margin_traits::ViewError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration
    Config,
    /// JSON or JS object conversion error
    Json,
    /// A DOM operation failed
    Dom,
    /// No `window` or `document` (e.g. running in a worker)
    Environment,
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because it is converted into a
/// JavaScript `Error` object instead.
#[derive(Debug)]
pub struct MarginError {
    code: ErrorCode,
    message: String,
}

impl MarginError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Environment, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<EnhanceError> for MarginError {
    fn from(err: EnhanceError) -> Self {
        let code = match &err {
            EnhanceError::Config(_) => ErrorCode::Config,
            EnhanceError::View(_) => ErrorCode::Dom,
            EnhanceError::Json(_) => ErrorCode::Json,
        };
        Self::new(code, err.to_string())
    }
}

impl From<ViewError> for MarginError {
    fn from(err: ViewError) -> Self {
        Self::new(ErrorCode::Dom, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for MarginError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Json, err.to_string())
    }
}

impl From<MarginError> for JsValue {
    fn from(err: MarginError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        let code_str = match err.code {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Environment => "ENVIRONMENT_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}

/// Describes a JavaScript exception thrown by a DOM call.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
