//! `View` over the live DOM.

use crate::error::{MarginError, describe_js};
use log::warn;
use margin_traits::{View, ViewError};
use margin_types::{ScrollMetrics, Selector};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// A handle on the page's `window` and `document`. Cloning is cheap; clones
/// refer to the same page.
#[derive(Debug, Clone)]
pub struct WebView {
    window: Window,
    document: Document,
}

impl WebView {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Binds to the global `window`. Fails outside a browsing context.
    pub fn from_window() -> Result<Self, MarginError> {
        let window =
            web_sys::window().ok_or_else(|| MarginError::environment("no global `window`"))?;
        let document = window
            .document()
            .ok_or_else(|| MarginError::environment("`window` has no document"))?;
        Ok(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn dom_error(op: &'static str, err: wasm_bindgen::JsValue) -> ViewError {
    ViewError::operation(op, describe_js(&err))
}

impl View for WebView {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        let css = selector.to_string();
        match self.document.query_selector_all(&css) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(e) => {
                warn!("querySelectorAll('{}') failed: {}", css, describe_js(&e));
                Vec::new()
            }
        }
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn text(&self, node: &Element) -> String {
        match node.dyn_ref::<HtmlElement>() {
            Some(html) => html.inner_text(),
            None => node.text_content().unwrap_or_default(),
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_attribute(&self, node: &Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, ViewError> {
        self.document
            .create_element(tag)
            .map_err(|e| dom_error("createElement", e))
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), ViewError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| dom_error("appendChild", e))
    }

    fn set_text(&mut self, node: &Element, text: &str) -> Result<(), ViewError> {
        node.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<(), ViewError> {
        node.set_attribute(name, value)
            .map_err(|e| dom_error("setAttribute", e))
    }

    fn add_classes(&mut self, node: &Element, classes: &[&str]) -> Result<(), ViewError> {
        let list = node.class_list();
        for class in classes {
            list.add_1(class).map_err(|e| dom_error("classList.add", e))?;
        }
        Ok(())
    }

    fn remove_classes(&mut self, node: &Element, classes: &[&str]) -> Result<(), ViewError> {
        let list = node.class_list();
        for class in classes {
            list.remove_1(class)
                .map_err(|e| dom_error("classList.remove", e))?;
        }
        Ok(())
    }

    fn set_style_property(
        &mut self,
        node: &Element,
        property: &str,
        value: &str,
    ) -> Result<(), ViewError> {
        let html = node.dyn_ref::<HtmlElement>().ok_or_else(|| {
            ViewError::operation("style.setProperty", "element has no inline style")
        })?;
        html.style()
            .set_property(property, value)
            .map_err(|e| dom_error("style.setProperty", e))
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let root = self.document.document_element();
        let body_top = self.document.body().map(|b| b.scroll_top()).unwrap_or(0);
        let root_top = root.as_ref().map(|r| r.scroll_top()).unwrap_or(0);
        let scroll_top = if body_top != 0 { body_top } else { root_top };
        ScrollMetrics::new(
            f64::from(scroll_top),
            root.as_ref().map(|r| f64::from(r.scroll_height())).unwrap_or(0.0),
            root.as_ref().map(|r| f64::from(r.client_height())).unwrap_or(0.0),
        )
    }
}
