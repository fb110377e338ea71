//! View trait for abstracting document access.
//!
//! The enhancement components never touch a browser API directly. Everything
//! they read or mutate goes through this trait, so the same logic runs
//! against the live DOM (`margin-wasm`) and against an in-memory document
//! (`margin-dom`) in tests and on the command line.

use margin_types::{ScrollMetrics, Selector};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for view operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Node handle does not belong to this view: {0}")]
    UnknownNode(String),

    #[error("DOM operation '{op}' failed: {message}")]
    Operation { op: &'static str, message: String },
}

impl ViewError {
    pub fn operation(op: &'static str, message: impl Into<String>) -> Self {
        ViewError::Operation {
            op,
            message: message.into(),
        }
    }
}

/// Read and mutate access to a rendered page.
///
/// # Implementations
///
/// - `Document` (`margin-dom`): arena-backed, always available
/// - `WebView` (`margin-wasm`): wraps `web_sys::Document`
///
/// Lookups return `Option`/`Vec` because absence is an expected outcome that
/// callers branch on. Mutations return `Result` because a failed write is not.
pub trait View {
    /// A handle to one element of the page.
    type Node: Clone + PartialEq + Debug;

    /// Looks up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Node>;

    /// The first element matching `selector`.
    fn query(&self, selector: &Selector) -> Option<Self::Node> {
        match selector {
            Selector::Id(id) => self.element_by_id(id),
            _ => self.query_all(selector).into_iter().next(),
        }
    }

    /// Lower-case tag name of `node`.
    fn tag_name(&self, node: &Self::Node) -> String;

    /// The rendered text of `node` and its descendants.
    fn text(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Creates a detached element. It becomes visible once appended.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, ViewError>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), ViewError>;

    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), ViewError>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str)
        -> Result<(), ViewError>;

    /// Adds each class not already present.
    fn add_classes(&mut self, node: &Self::Node, classes: &[&str]) -> Result<(), ViewError>;

    /// Removes each class that is present.
    fn remove_classes(&mut self, node: &Self::Node, classes: &[&str]) -> Result<(), ViewError>;

    /// Sets an inline style property, e.g. `width` or `transform`.
    fn set_style_property(
        &mut self,
        node: &Self::Node,
        property: &str,
        value: &str,
    ) -> Result<(), ViewError>;

    /// Current vertical scroll geometry of the page.
    fn scroll_metrics(&self) -> ScrollMetrics;
}
