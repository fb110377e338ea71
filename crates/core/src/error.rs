//! Error types for configuring and installing the enhancements.

use margin_traits::ViewError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("View error: {0}")]
    View(#[from] ViewError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
