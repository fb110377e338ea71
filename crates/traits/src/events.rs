//! Event registration.
//!
//! Components never subscribe to the browser themselves; the bootstrap hands
//! each handler to an [`EventSource`]. In the browser the source installs real
//! listeners. In tests and on the command line [`SimulatedEvents`] stores the
//! handlers and invokes them on demand.

use crate::view::{View, ViewError};
use log::{trace, warn};

/// The events the enhancement layer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<N> {
    /// The document finished parsing (`DOMContentLoaded`).
    Ready,
    /// The window scrolled.
    Scroll,
    /// The given element was clicked.
    Click(N),
}

impl<N> Event<N> {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Ready => "ready",
            Event::Scroll => "scroll",
            Event::Click(_) => "click",
        }
    }
}

/// A registered callback. It receives the view it should act on.
pub type Handler<V> = Box<dyn FnMut(&mut V) -> Result<(), ViewError>>;

/// Accepts handler registrations for a particular view type.
pub trait EventSource<V: View> {
    fn listen(&mut self, event: Event<V::Node>, handler: Handler<V>) -> Result<(), ViewError>;
}

/// An event source that dispatches only when told to.
///
/// Handlers run in registration order. A handler error is logged and does not
/// stop the remaining handlers, mirroring how a browser keeps dispatching
/// after a listener throws.
pub struct SimulatedEvents<V: View> {
    handlers: Vec<(Event<V::Node>, Handler<V>)>,
}

impl<V: View> Default for SimulatedEvents<V> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<V: View> SimulatedEvents<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers registered for events equal to `event`.
    pub fn listener_count(&self, event: &Event<V::Node>) -> usize {
        self.handlers.iter().filter(|(e, _)| e == event).count()
    }

    /// Runs every handler registered for `event`. Returns how many handlers
    /// ran without error.
    pub fn dispatch(&mut self, view: &mut V, event: &Event<V::Node>) -> usize {
        let mut succeeded = 0;
        for (registered, handler) in self.handlers.iter_mut() {
            if registered != event {
                continue;
            }
            trace!("Dispatching {} event", event.name());
            match handler(view) {
                Ok(()) => succeeded += 1,
                Err(e) => warn!("{} handler failed: {}", event.name(), e),
            }
        }
        succeeded
    }

    pub fn fire_ready(&mut self, view: &mut V) -> usize {
        self.dispatch(view, &Event::Ready)
    }

    pub fn fire_scroll(&mut self, view: &mut V) -> usize {
        self.dispatch(view, &Event::Scroll)
    }

    pub fn fire_click(&mut self, view: &mut V, target: &V::Node) -> usize {
        self.dispatch(view, &Event::Click(target.clone()))
    }
}

impl<V: View> EventSource<V> for SimulatedEvents<V> {
    fn listen(&mut self, event: Event<V::Node>, handler: Handler<V>) -> Result<(), ViewError> {
        self.handlers.push((event, handler));
        Ok(())
    }
}
