mod common;

use common::{TestResult, fixtures, init_logging};
use margin::{EnhanceConfig, Feature, OfflinePage, RunError, ScrollMetrics, View};

fn docs() -> Result<OfflinePage, RunError> {
    OfflinePage::load(&fixtures::docs_page(fixtures::title_a_b_c()), EnhanceConfig::default())
}

#[test]
fn test_every_feature_installs_on_the_docs_layout() -> TestResult {
    init_logging();
    let mut page = docs()?;

    assert!(page.installed().contains(Feature::MenuToggle));
    assert!(page.installed().contains(Feature::HeaderShrink));

    let report = page.ready().expect("ready handler ran");
    assert_eq!(report.features, [Feature::ScrollProgress, Feature::PageNav]);
    Ok(())
}

#[test]
fn test_header_threshold_boundary() -> TestResult {
    let mut page = docs()?;
    page.ready();
    let bar = page.document().element_by_id("top-bar").unwrap();
    let logo = page.document().child_elements(bar)[0];

    page.scroll_to(501.0);
    assert!(page.document().has_class(bar, "py-3"));
    assert!(page.document().has_class(logo, "w-12"));

    page.scroll_to(500.0);
    assert!(!page.document().has_class(bar, "py-3"));
    assert!(page.document().has_class(logo, "w-16"));
    assert!(!page.document().has_class(logo, "w-12"));
    Ok(())
}

#[test]
fn test_progress_tracks_scroll() -> TestResult {
    let doc = margin::Document::parse_xhtml(&fixtures::docs_page(fixtures::title_a_b_c()))?;
    let mut page = OfflinePage::from_document(doc, EnhanceConfig::default())?;
    page.ready();
    let progress = page.document().element_by_id("progress").unwrap();

    // The simulated document starts with no scrollable height.
    page.scroll_to(0.0);
    assert_eq!(page.document().style(progress, "width"), Some("0%"));
    Ok(())
}

#[test]
fn test_progress_reaches_full_width_at_bottom() -> TestResult {
    let mut doc = margin::Document::parse_xhtml(&fixtures::docs_page(fixtures::title_a_b_c()))?;
    doc.set_scroll(ScrollMetrics::new(0.0, 2400.0, 800.0));
    let mut page = OfflinePage::from_document(doc, EnhanceConfig::default())?;
    page.ready();
    let progress = page.document().element_by_id("progress").unwrap();

    page.scroll_to(1600.0);
    assert_eq!(page.document().style(progress, "width"), Some("100%"));
    page.scroll_to(400.0);
    assert_eq!(page.document().style(progress, "width"), Some("25%"));
    Ok(())
}

#[test]
fn test_menu_round_trip_restores_markup() -> TestResult {
    let mut page = docs()?;
    page.ready();
    let before = page.to_html();

    page.click("nav-toggle")?;
    let menu = page.document().element_by_id("mobile-menu").unwrap();
    assert!(page.document().has_class(menu, "translate-x-0"));

    page.click("nav-toggle")?;
    let after = page.to_html();
    let menu_html = page.document().to_html(menu);
    assert_eq!(menu_html, r#"<aside id="mobile-menu" class="fixed -translate-x-full"></aside>"#);
    // Only the closed-state inline styles differ from the freshly loaded page.
    assert!(after.contains(r#"style="transform: rotate(0deg);""#));
    assert_ne!(before, after);
    Ok(())
}

#[test]
fn test_clicking_a_missing_element_is_an_error() -> TestResult {
    let mut page = docs()?;
    assert!(matches!(page.click("nope"), Err(RunError::MissingElement(id)) if id == "nope"));
    Ok(())
}

#[test]
fn test_plain_page_is_left_alone() -> TestResult {
    let mut page = OfflinePage::load(fixtures::plain_page(), EnhanceConfig::default())?;
    let before = page.to_html();

    assert!(page.installed().features.is_empty());
    let report = page.ready().expect("ready handler ran");
    assert!(report.features.is_empty());
    page.scroll_to(900.0);

    assert_eq!(page.to_html(), before);
    assert!(matches!(page.nav_output(), Err(RunError::MissingElement(_))));
    Ok(())
}

#[test]
fn test_page_size_drives_progress() -> TestResult {
    let mut page = docs()?;
    page.set_page_size(3000.0, 1000.0);
    page.ready();
    let progress = page.document().element_by_id("progress").unwrap();

    page.scroll_to(500.0);
    assert_eq!(page.document().style(progress, "width"), Some("25%"));
    page.scroll_to(2000.0);
    assert_eq!(page.document().style(progress, "width"), Some("100%"));
    Ok(())
}
