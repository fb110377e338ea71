//! Loading documents from markup.
//!
//! Only well-formed XHTML is accepted: the site generator's output is fed
//! through `roxmltree`, which does not recover from tag soup. Whitespace-only
//! text is dropped inside elements that cannot hold text (`html`, `head`,
//! lists, tables) and kept everywhere else, where it can separate words.

use crate::document::{Document, NodeId};
use log::debug;
use margin_traits::{View, ViewError};
use thiserror::Error;

/// Elements whose content model has no text. Whitespace inside them is
/// formatting only.
const NO_TEXT_CONTENT: &[&str] = &[
    "html", "head", "table", "thead", "tbody", "tfoot", "tr", "colgroup", "ul", "ol", "dl",
    "select", "optgroup",
];

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Markup is not well-formed XHTML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Failed to build document: {0}")]
    View(#[from] ViewError),
}

impl Document {
    /// Parses an XHTML page or fragment. The fragment must have a single root
    /// element; a `DOCTYPE` is allowed.
    pub fn parse_xhtml(text: &str) -> Result<Document, DomError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let xml = roxmltree::Document::parse_with_options(text, options)?;
        let source_root = xml.root_element();

        let mut doc = Document::new(source_root.tag_name().name());
        let root = doc.root();
        copy_attributes(&mut doc, root, source_root)?;
        copy_children(&mut doc, root, source_root)?;

        debug!(
            "Parsed <{}> document with {} nodes",
            source_root.tag_name().name(),
            doc.nodes.len()
        );
        Ok(doc)
    }
}

fn copy_attributes(
    doc: &mut Document,
    target: NodeId,
    source: roxmltree::Node<'_, '_>,
) -> Result<(), ViewError> {
    for attr in source.attributes() {
        doc.set_attribute(&target, attr.name(), attr.value())?;
    }
    Ok(())
}

fn copy_children(
    doc: &mut Document,
    target: NodeId,
    source: roxmltree::Node<'_, '_>,
) -> Result<(), ViewError> {
    let keep_blank = !NO_TEXT_CONTENT.contains(&source.tag_name().name());
    for child in source.children() {
        if child.is_element() {
            let node = doc.append_element(target, child.tag_name().name(), &[])?;
            copy_attributes(doc, node, child)?;
            copy_children(doc, node, child)?;
        } else if child.is_text() {
            match child.text() {
                Some(text) if keep_blank || !text.trim().is_empty() => {
                    doc.append_text(target, text)?;
                }
                _ => {}
            }
        }
    }
    Ok(())
}
