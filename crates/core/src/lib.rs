//! # margin-core
//!
//! Platform-agnostic page enhancements for a static documentation site:
//! - **slugger**: heading identifiers derived from heading text
//! - **page_nav**: the in-page "Contents" sidebar
//! - **scroll_progress**: the reading progress bar
//! - **header**: scroll-triggered top bar shrinking
//! - **menu**: the mobile menu toggle
//! - **bootstrap**: wiring the above to an event source
//! - **config**: element ids, thresholds and class sets
//! - **error**: error types
//!
//! ## Design Principle
//!
//! Nothing here touches a browser. Components read and mutate the page only
//! through [`View`](margin_traits::View) and receive events only through
//! [`EventSource`](margin_traits::EventSource), so the same code runs in the
//! browser (`margin-wasm`) and against an in-memory document (`margin-dom`).

// Re-export foundation crates
pub use margin_traits as traits;
pub use margin_types as types;

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod header;
pub mod menu;
pub mod page_nav;
pub mod scroll_progress;
pub mod slugger;

pub use bootstrap::{Enhancer, Feature, Installed, ReadyReport};
pub use config::{
    DuplicatePolicy, ElementIds, EnhanceConfig, HeaderTheme, MenuTheme, NavTheme, SlugStyle, Theme,
};
pub use error::EnhanceError;
pub use header::{HeaderShrink, HeaderState};
pub use menu::{MenuState, MenuToggle};
pub use page_nav::PageNavBuilder;
pub use scroll_progress::{ScrollProgress, scroll_percent};
pub use slugger::{Slugger, slugify};

// Re-export commonly used types from foundation crates
pub use traits::{Event, EventSource, Handler, SimulatedEvents, View, ViewError};
pub use types::{AnchorId, HeadingLevel, NavEntry, ScrollMetrics, Selector};
