//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

use margin_core::{EnhanceConfig, HeaderShrink, HeaderTheme, PageNavBuilder, View};
use margin_wasm::WebView;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_body(view: &WebView, html: &str) {
    view.document()
        .body()
        .expect("test page has a body")
        .set_inner_html(html);
}

#[wasm_bindgen_test]
fn test_init() {
    let version = margin_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_slugify_export() {
    assert_eq!(margin_wasm::slugify("Getting Started", None), "getting-started");
    assert_eq!(margin_wasm::slugify("What's New?", Some(true)), "what-s-new");
}

#[wasm_bindgen_test]
fn test_page_nav_on_live_dom() {
    let mut view = WebView::from_window().expect("browser context");
    fresh_body(
        &view,
        r#"<nav id="page-nav"></nav>
           <h1>Guide</h1>
           <h2>Install</h2>
           <h3 data-page-nav="false">Hidden</h3>
           <h3>Verify</h3>"#,
    );

    let container = view.element_by_id("page-nav").unwrap();
    let entries = PageNavBuilder::new(&EnhanceConfig::default())
        .build(&mut view, &container)
        .expect("navigation builds");

    let targets: Vec<_> = entries.iter().map(|e| e.target.to_string()).collect();
    assert_eq!(targets, ["install", "verify"]);
    assert_eq!(container.query_selector_all("li").unwrap().length(), 2);
    assert!(view.element_by_id("guide").is_some());
}

#[wasm_bindgen_test]
fn test_header_classes_on_live_dom() {
    let mut view = WebView::from_window().expect("browser context");
    fresh_body(&view, r#"<header id="top-bar"><a class="w-16 h-16 p-4">Logo</a></header>"#);

    let bar = view.element_by_id("top-bar").unwrap();
    let logo = bar.query_selector("a").unwrap().unwrap();
    let mut header = HeaderShrink::new(bar.clone(), Some(logo.clone()), 500.0, HeaderTheme::default());
    header.update(&mut view).unwrap();

    assert!(logo.class_list().contains("w-16"));
    assert!(!bar.class_list().contains("py-3"));
}

#[wasm_bindgen_test]
fn test_install_on_empty_page() {
    let view = WebView::from_window().expect("browser context");
    fresh_body(&view, "<p>No enhancements here</p>");

    let summary = margin_wasm::MarginEnhancer::new().install().unwrap();
    assert!(!summary.menu_toggle());
    assert!(!summary.header_shrink());
}
