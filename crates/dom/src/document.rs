use margin_traits::{View, ViewError};
use margin_types::{ScrollMetrics, Selector};

/// Handle to a node in a [`Document`]. Only meaningful for the document that
/// created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    /// Attributes other than `class` and `style`, in insertion order.
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) style: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An arena-allocated element tree with a simulated scroll position.
///
/// Nodes are never freed. Elements created with
/// [`create_element`](View::create_element) stay detached, and invisible to
/// queries, until appended somewhere under the root.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    root: NodeId,
    scroll: ScrollMetrics,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("body")
    }
}

impl Document {
    /// Creates a document whose root element has the given tag.
    pub fn new(root_tag: &str) -> Self {
        let root = Node {
            kind: NodeKind::Element(ElementData {
                tag: root_tag.to_ascii_lowercase(),
                ..ElementData::default()
            }),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            scroll: ScrollMetrics::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a new element under `parent` and returns it. `id`, `class` and
    /// `style` attributes are routed to their dedicated storage.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> Result<NodeId, ViewError> {
        let node = self.create_element(tag)?;
        for (name, value) in attributes {
            self.set_attribute(&node, name, value)?;
        }
        self.append_child(&parent, &node)?;
        Ok(node)
    }

    /// Appends a text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, ViewError> {
        self.element(parent)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Text(text.to_string()),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Convenience for the common `<tag>text</tag>` shape.
    pub fn append_element_with_text(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> Result<NodeId, ViewError> {
        let node = self.append_element(parent, tag, attributes)?;
        self.append_text(node, text)?;
        Ok(node)
    }

    pub fn set_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll = metrics;
    }

    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll.scroll_top = scroll_top;
    }

    /// The class list of an element, in insertion order. Empty for text nodes.
    pub fn classes(&self, node: NodeId) -> &[String] {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element(data)) => &data.classes,
            _ => &[],
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    /// The value of an inline style property, if set.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element(data)) => data
                .style
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Direct children that are elements.
    pub fn child_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node.0)
            .map(|n| {
                n.children
                    .iter()
                    .copied()
                    .filter(|c| matches!(self.nodes[c.0].kind, NodeKind::Element(_)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Element descendants of `node` in document (pre-order) order, excluding
    /// `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_elements(node).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.child_elements(id).into_iter().rev());
        }
        out
    }

    pub(crate) fn element(&self, node: NodeId) -> Result<&ElementData, ViewError> {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element(data)) => Ok(data),
            Some(NodeKind::Text(_)) => Err(ViewError::UnknownNode(format!(
                "node {} is a text node",
                node.0
            ))),
            None => Err(ViewError::UnknownNode(format!("node {}", node.0))),
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, ViewError> {
        match self.nodes.get_mut(node.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(data)) => Ok(data),
            Some(NodeKind::Text(_)) => Err(ViewError::UnknownNode(format!(
                "node {} is a text node",
                node.0
            ))),
            None => Err(ViewError::UnknownNode(format!("node {}", node.0))),
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        match &n.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element(_) => {
                for child in &n.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }
}

impl View for Document {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let scope = match selector {
            Selector::Id(id) => return self.element_by_id(id).into_iter().collect(),
            Selector::Within { ancestor_id, .. } => match self.element_by_id(ancestor_id) {
                Some(ancestor) => self.descendants(ancestor),
                None => return Vec::new(),
            },
            Selector::ChildOf { parent_id, .. } => match self.element_by_id(parent_id) {
                Some(parent) => self.child_elements(parent),
                None => return Vec::new(),
            },
            Selector::Tag(_) | Selector::AnyTag(_) => std::iter::once(self.root)
                .chain(self.descendants(self.root))
                .collect(),
        };
        scope
            .into_iter()
            .filter(|node| {
                self.element(*node)
                    .map(|data| selector.matches_tag(&data.tag))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.element(*node)
            .map(|data| data.tag.clone())
            .unwrap_or_default()
    }

    /// Approximates `innerText`: descendant text with whitespace runs
    /// collapsed to one space and the ends trimmed.
    fn text(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.collect_text(*node, &mut out);
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let data = self.element(*node).ok()?;
        match name {
            "class" if !data.classes.is_empty() => Some(data.classes.join(" ")),
            "class" => None,
            "style" if !data.style.is_empty() => Some(
                data.style
                    .iter()
                    .map(|(p, v)| format!("{}: {};", p, v))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            "style" => None,
            _ => data
                .attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
        }
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, ViewError> {
        if tag.is_empty() || tag.contains(char::is_whitespace) {
            return Err(ViewError::operation(
                "createElement",
                format!("invalid tag name '{}'", tag),
            ));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Element(ElementData {
                tag: tag.to_ascii_lowercase(),
                ..ElementData::default()
            }),
            parent: None,
            children: Vec::new(),
        });
        Ok(id)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), ViewError> {
        self.element(*parent)?;
        if child.0 >= self.nodes.len() {
            return Err(ViewError::UnknownNode(format!("node {}", child.0)));
        }
        // Appending an ancestor under its own descendant would create a cycle.
        let mut cursor = Some(*parent);
        while let Some(id) = cursor {
            if id == *child {
                return Err(ViewError::operation(
                    "appendChild",
                    "the new child is an ancestor of the parent",
                ));
            }
            cursor = self.parent(id);
        }
        self.detach(*child);
        self.nodes[child.0].parent = Some(*parent);
        self.nodes[parent.0].children.push(*child);
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), ViewError> {
        self.element(*node)?;
        let old_children = std::mem::take(&mut self.nodes[node.0].children);
        for child in old_children {
            self.nodes[child.0].parent = None;
        }
        self.append_text(*node, text)?;
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), ViewError> {
        let data = self.element_mut(*node)?;
        match name {
            "class" => {
                data.classes = value.split_whitespace().map(str::to_string).collect();
            }
            "style" => {
                data.style = value
                    .split(';')
                    .filter_map(|decl| decl.split_once(':'))
                    .map(|(p, v)| (p.trim().to_string(), v.trim().to_string()))
                    .filter(|(p, _)| !p.is_empty())
                    .collect();
            }
            _ => match data.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => data.attributes.push((name.to_string(), value.to_string())),
            },
        }
        Ok(())
    }

    fn add_classes(&mut self, node: &NodeId, classes: &[&str]) -> Result<(), ViewError> {
        let data = self.element_mut(*node)?;
        for class in classes {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push((*class).to_string());
            }
        }
        Ok(())
    }

    fn remove_classes(&mut self, node: &NodeId, classes: &[&str]) -> Result<(), ViewError> {
        let data = self.element_mut(*node)?;
        data.classes.retain(|c| !classes.contains(&c.as_str()));
        Ok(())
    }

    fn set_style_property(
        &mut self,
        node: &NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), ViewError> {
        let data = self.element_mut(*node)?;
        match data.style.iter_mut().find(|(p, _)| p == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll
    }
}
