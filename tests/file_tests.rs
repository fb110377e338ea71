mod common;

use common::{TestResult, fixtures};
use margin::{EnhanceConfig, OfflinePage, RunError};
use std::io::Write;

#[test]
fn test_load_page_from_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(fixtures::docs_page(fixtures::title_a_b_c()).as_bytes())?;

    let mut page = OfflinePage::from_file(file.path(), EnhanceConfig::default())?;
    let output = page.nav_output()?;

    assert_eq!(output.entries.len(), 2);
    let json = serde_json::to_value(&output)?;
    assert_eq!(json["entries"][1]["level"], "subsection");
    assert_eq!(json["entries"][0]["target"], "a");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = OfflinePage::from_file("/definitely/not/here.xhtml", EnhanceConfig::default());
    assert!(matches!(result, Err(RunError::Io(_))));
}

#[test]
fn test_tag_soup_is_rejected() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"<html><body><p>unclosed</body></html>")?;

    let result = OfflinePage::from_file(file.path(), EnhanceConfig::default());
    assert!(matches!(result, Err(RunError::Dom(_))));
    Ok(())
}
