//! Element tree and node handles

use std::collections::BTreeMap;

/// Opaque handle to one element in a [`Document`].
///
/// Handles are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Inline display state of an element.
///
/// `Unset` means no inline style was applied and the stylesheet default
/// (visible) governs. Showing a panel sets `Block`, hiding sets `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Unset,
    Block,
    None,
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) display: Display,
}

#[derive(Debug)]
struct NodeData {
    element: Element,
    children: Vec<NodeId>,
}

/// An element tree built from markup, addressed by [`NodeId`] handles.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn push(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            element,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(node);
        }
        node
    }

    /// Root of the tree (the `html` element).
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Whether `node` is a handle into this document.
    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    /// Descendants of `node` in document (pre-)order, excluding `node`
    /// itself. This matches subtree-scoped query semantics.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let mut stack = self.nodes[node.0].children.clone();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// First element in document order with the given `id` attribute.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.root())
            .chain(self.descendants(self.root()))
            .find(|&n| self.nodes[n.0].element.id.as_deref() == Some(id))
    }

    /// First element with the given `id` attribute inside the subtree of
    /// `scope`, excluding `scope` itself.
    pub fn scoped_element_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(scope)
            .find(|&n| self.nodes[n.0].element.id.as_deref() == Some(id))
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].element.tag
    }

    pub fn id_attr(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].element.id.as_deref()
    }

    // === Class operations ===

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0]
            .element
            .classes
            .iter()
            .any(|c| c == class)
    }

    /// Add `class` to the element. Idempotent.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].element.classes.push(class.to_string());
        }
    }

    /// Remove `class` from the element. Idempotent.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].element.classes.retain(|c| c != class);
    }

    // === Attribute operations ===

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].element.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.nodes[node.0].element.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .element
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    // === Display operations ===

    pub fn display(&self, node: NodeId) -> Display {
        self.nodes[node.0].element.display
    }

    pub fn set_display(&mut self, node: NodeId, display: Display) {
        self.nodes[node.0].element.display = display;
    }

    /// An element is visible unless an inline `display: none` is applied.
    pub fn is_visible(&self, node: NodeId) -> bool {
        self.nodes[node.0].element.display != Display::None
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        let children = &self.doc.nodes[node.0].children;
        self.stack.extend(children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Document {
        Document::parse(
            r#"
            <div class="outer">
              <section id="a" class="panel codeArea">
                <span id="a1"></span>
              </section>
              <section id="b" class="panel" data-role="extra"></section>
            </div>
            <div id="tail"></div>
            "#,
        )
    }

    #[test]
    fn test_descendants_document_order() {
        let doc = fixture();
        let ids: Vec<_> = doc
            .descendants(doc.root())
            .filter_map(|n| doc.id_attr(n))
            .collect();
        assert_eq!(ids, vec!["a", "a1", "b", "tail"]);
    }

    #[test]
    fn test_scoped_vs_global_id_lookup() {
        let doc = fixture();
        let outer = doc
            .descendants(doc.root())
            .find(|&n| doc.has_class(n, "outer"))
            .unwrap();

        assert!(doc.scoped_element_by_id(outer, "a").is_some());
        assert!(doc.scoped_element_by_id(outer, "tail").is_none());
        assert!(doc.element_by_id("tail").is_some());
        assert!(doc.element_by_id("nope").is_none());
    }

    #[test]
    fn test_class_mutation_is_idempotent() {
        let mut doc = fixture();
        let a = doc.element_by_id("a").unwrap();

        doc.add_class(a, "active");
        doc.add_class(a, "active");
        assert!(doc.has_class(a, "active"));
        assert_eq!(
            doc.descendants(doc.root())
                .filter(|&n| doc.has_class(n, "active"))
                .count(),
            1
        );

        doc.remove_class(a, "active");
        assert!(!doc.has_class(a, "active"));
        doc.remove_class(a, "active");
        assert!(doc.has_class(a, "panel"));
    }

    #[test]
    fn test_display_defaults_to_visible() {
        let mut doc = fixture();
        let b = doc.element_by_id("b").unwrap();

        assert_eq!(doc.display(b), Display::Unset);
        assert!(doc.is_visible(b));

        doc.set_display(b, Display::None);
        assert!(!doc.is_visible(b));

        doc.set_display(b, Display::Block);
        assert!(doc.is_visible(b));
    }

    #[test]
    fn test_attrs_and_tags() {
        let doc = fixture();
        let b = doc.element_by_id("b").unwrap();

        assert_eq!(doc.tag(b), "section");
        assert_eq!(doc.attr(b, "data-role"), Some("extra"));
        assert!(doc.has_attr(b, "data-role"));
        assert!(!doc.has_attr(b, "aria-pressed"));
    }
}
