//! `EventSource` over `addEventListener`.

use crate::error::describe_js;
use crate::view::WebView;
use log::{debug, warn};
use margin_traits::{Event, EventSource, Handler, ViewError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Installs handlers as real DOM listeners.
///
/// Each listener receives its own clone of the view. Listeners are leaked
/// with [`Closure::forget`] and stay attached until the page unloads.
pub struct WebEvents {
    view: WebView,
}

impl WebEvents {
    pub fn new(view: &WebView) -> Self {
        Self { view: view.clone() }
    }
}

impl EventSource<WebView> for WebEvents {
    fn listen(
        &mut self,
        event: Event<Element>,
        mut handler: Handler<WebView>,
    ) -> Result<(), ViewError> {
        let name = event.name();

        // DOMContentLoaded has already fired; run the handler now.
        if event == Event::Ready && self.view.document().ready_state() != "loading" {
            debug!("Document already parsed; running ready handler immediately");
            let mut view = self.view.clone();
            if let Err(e) = handler(&mut view) {
                warn!("{} handler failed: {}", name, e);
            }
            return Ok(());
        }

        let mut view = self.view.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if let Err(e) = handler(&mut view) {
                warn!("{} handler failed: {}", name, e);
            }
        });
        let function = callback.as_ref().unchecked_ref();

        let registered = match &event {
            Event::Ready => self
                .view
                .document()
                .add_event_listener_with_callback("DOMContentLoaded", function),
            Event::Scroll => self
                .view
                .window()
                .add_event_listener_with_callback("scroll", function),
            Event::Click(target) => target.add_event_listener_with_callback("click", function),
        };
        registered.map_err(|e| ViewError::operation("addEventListener", describe_js(&e)))?;

        callback.forget();
        Ok(())
    }
}
