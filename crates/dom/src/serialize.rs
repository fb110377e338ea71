use crate::document::{Document, NodeId, NodeKind};
use quick_xml::escape::escape;

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Serializes `node` and its subtree as HTML. Attributes are written in
    /// insertion order, followed by `class` and `style`.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serializes only the children of `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_children(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.index()) else {
            return;
        };
        match &n.kind {
            NodeKind::Text(text) => out.push_str(&escape(text.as_str())),
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag);
                for (name, value) in &data.attributes {
                    push_attribute(out, name, value);
                }
                if !data.classes.is_empty() {
                    push_attribute(out, "class", &data.classes.join(" "));
                }
                if !data.style.is_empty() {
                    let style = data
                        .style
                        .iter()
                        .map(|(p, v)| format!("{}: {};", p, v))
                        .collect::<Vec<_>>()
                        .join(" ");
                    push_attribute(out, "style", &style);
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&data.tag.as_str()) {
                    return;
                }
                self.write_children(node, out);
                out.push_str("</");
                out.push_str(&data.tag);
                out.push('>');
            }
        }
    }

    fn write_children(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.index()) else {
            return;
        };
        let raw = match &n.kind {
            NodeKind::Element(data) => RAW_TEXT_ELEMENTS.contains(&data.tag.as_str()),
            NodeKind::Text(_) => false,
        };
        for child in &n.children {
            match self.nodes.get(child.index()).map(|c| &c.kind) {
                Some(NodeKind::Text(text)) if raw => out.push_str(text),
                _ => self.write_html(*child, out),
            }
        }
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}
