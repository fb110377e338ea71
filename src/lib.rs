//! # margin
//!
//! Page enhancements for a static documentation site, written once against
//! an abstract [`View`] and run either in the browser (`margin-wasm`) or
//! offline against an in-memory [`Document`].
//!
//! The offline path ([`offline`]) drives the same bootstrap the browser
//! uses, through [`SimulatedEvents`], and is what the `margin` binary runs.

pub use margin_core as core;
pub use margin_dom as dom;
pub use margin_traits as traits;
pub use margin_types as types;

pub mod error;
pub mod offline;

pub use error::RunError;
pub use offline::{NavOutput, OfflinePage};

pub use margin_core::{
    EnhanceConfig, EnhanceError, Enhancer, Feature, Installed, PageNavBuilder, ReadyReport,
    SlugStyle, Slugger, slugify,
};
pub use margin_dom::{Document, DomError, NodeId};
pub use margin_traits::{Event, EventSource, SimulatedEvents, View, ViewError};
pub use margin_types::{AnchorId, HeadingLevel, NavEntry, ScrollMetrics, Selector};
