//! In-memory document model.
//!
//! [`Document`] is a small arena DOM that implements
//! [`View`](margin_traits::View). It backs the command-line tool and every
//! test that exercises the enhancement components without a browser.
//!
//! - [`document`] - arena, node handles and the `View` implementation
//! - [`parse`] - loading well-formed XHTML through `roxmltree`
//! - [`serialize`] - writing a subtree back out as HTML

pub mod document;
pub mod parse;
pub mod serialize;

pub use document::{Document, NodeId};
pub use parse::DomError;
