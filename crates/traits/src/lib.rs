pub mod events;
pub mod view;

pub use events::{Event, EventSource, Handler, SimulatedEvents};
pub use view::{View, ViewError};
