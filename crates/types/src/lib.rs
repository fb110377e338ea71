pub mod heading;
pub mod ids;
pub mod scroll;
pub mod selector;

pub use heading::{HeadingLevel, NavEntry};
pub use ids::AnchorId;
pub use scroll::ScrollMetrics;
pub use selector::Selector;
