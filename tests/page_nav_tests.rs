mod common;

use common::{TestResult, fixtures, init_logging};
use margin::{EnhanceConfig, HeadingLevel, OfflinePage, Selector, View};

#[test]
fn test_opted_out_heading_is_left_out() -> TestResult {
    init_logging();
    let mut page = OfflinePage::load(&fixtures::docs_page(fixtures::title_a_b_c()), EnhanceConfig::default())?;

    let output = page.nav_output()?;

    let texts: Vec<_> = output.entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["A", "B"]);
    assert_eq!(output.entries[0].level, HeadingLevel::Section);
    assert_eq!(output.entries[1].level, HeadingLevel::Subsection);
    assert!(!output.html.contains(">C<"));
    assert!(output.html.contains(r##"<a href="#title" class="font-bold no-underline text-zinc-300">Contents</a>"##));
    Ok(())
}

#[test]
fn test_guide_page_ids_and_links() -> TestResult {
    let mut page = OfflinePage::load(&fixtures::docs_page(fixtures::guide_article()), EnhanceConfig::default())?;

    let output = page.nav_output()?;

    let targets: Vec<_> = output.entries.iter().map(|e| e.target.as_str()).collect();
    // Duplicate headings keep duplicate ids under the default policy.
    assert_eq!(
        targets,
        ["getting-started", "install", "first-run", "configuration", "configuration"]
    );

    let doc = page.document();
    let links = doc.query_all(&Selector::within("page-nav", "a"));
    let hrefs: Vec<_> = links
        .iter()
        .filter_map(|link| doc.attribute(link, "href"))
        .collect();
    assert_eq!(
        hrefs,
        ["#user-guide", "#getting-started", "#install", "#first-run", "#configuration", "#configuration"]
    );
    Ok(())
}

#[test]
fn test_suffix_policy_from_json_config() -> TestResult {
    let config = EnhanceConfig::from_json(r#"{ "duplicateIds": "suffix", "slugStyle": "ascii" }"#)?;
    let mut page = OfflinePage::load(&fixtures::docs_page(fixtures::guide_article()), config)?;

    let output = page.nav_output()?;

    let targets: Vec<_> = output.entries.iter().map(|e| e.target.to_string()).collect();
    assert_eq!(
        targets,
        ["getting-started", "install", "first-run", "configuration", "configuration-2"]
    );
    Ok(())
}

#[test]
fn test_custom_container_and_label() -> TestResult {
    let config = EnhanceConfig::from_json(r#"{ "ids": { "pageNav": "toc" }, "navLabel": "On this page" }"#)?;
    let xhtml = r#"<html><body><div id="toc"></div><h1>T</h1><h2>S</h2></body></html>"#;
    let mut page = OfflinePage::load(xhtml, config)?;

    let output = page.nav_output()?;

    assert!(output.html.starts_with(r#"<div id="toc" class="text-zinc-300">"#));
    assert!(output.html.contains(">On this page</a>"));
    assert_eq!(output.entries.len(), 1);
    Ok(())
}

#[test]
fn test_space_between_inline_heading_markup() -> TestResult {
    let article = "<h1>Guide</h1>\n<h2><em>Getting</em> <code>started</code></h2>";
    let mut page = OfflinePage::load(&fixtures::docs_page(article), EnhanceConfig::default())?;

    let output = page.nav_output()?;

    assert_eq!(output.entries[0].target.as_str(), "getting-started");
    assert_eq!(output.entries[0].text, "Getting started");
    Ok(())
}
