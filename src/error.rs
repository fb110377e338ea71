// src/error.rs
use margin_core::EnhanceError;
use margin_dom::DomError;
use thiserror::Error;

/// Errors from running the enhancements offline.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not load page: {0}")]
    Dom(#[from] DomError),

    #[error("{0}")]
    Enhance(#[from] EnhanceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page has no element with id '{0}'")]
    MissingElement(String),
}
