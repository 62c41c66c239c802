//! Node and attribute handles
//!
//! A handle is a document reference plus an arena index. It is `Copy`, and
//! two handles are equal only when they name the same slot of the same
//! document, so handles from different documents never compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use super::document::XmlDocument;
use super::node::{AttrId, NodeId, NodeKind, XmlAttribute, XmlNode};
use crate::iter::{AttributeCursor, AttributeRange, NodeRange, SiblingCursor};
use crate::nav::{TreeAttribute, TreeNode};

/// Borrowed handle to a node of an [`XmlDocument`]
#[derive(Clone, Copy)]
pub struct Node<'d> {
    doc: &'d XmlDocument,
    id: NodeId,
}

impl<'d> Node<'d> {
    #[inline]
    pub(super) fn new(doc: &'d XmlDocument, id: NodeId) -> Self {
        Node { doc, id }
    }

    #[inline]
    fn record(&self) -> &'d XmlNode {
        &self.doc.nodes[self.id as usize]
    }

    #[inline]
    fn wrap(&self, id: Option<NodeId>) -> Option<Node<'d>> {
        id.map(|id| Node::new(self.doc, id))
    }

    /// Arena index of this node
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Document this node belongs to
    #[inline]
    pub fn document(&self) -> &'d XmlDocument {
        self.doc
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.record().kind
    }

    /// Nesting depth (root element is 1); saturates at `u16::MAX`
    #[inline]
    pub fn depth(&self) -> u16 {
        self.record().depth
    }

    /// Qualified name; empty for the document node and data nodes
    #[inline]
    pub fn name(&self) -> &'d str {
        self.doc.strings.get_or_empty(self.record().name_id)
    }

    /// Namespace prefix of the name, if any
    pub fn prefix(&self) -> Option<&'d str> {
        let name = self.name();
        memchr::memchr(b':', name.as_bytes()).map(|pos| &name[..pos])
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &'d str {
        let name = self.name();
        match memchr::memchr(b':', name.as_bytes()) {
            Some(pos) => &name[pos + 1..],
            None => name,
        }
    }

    /// Text of a data node, or data of a processing instruction
    #[inline]
    pub fn value(&self) -> &'d str {
        self.doc.strings.get_or_empty(self.record().value_id)
    }

    #[inline]
    pub fn parent(&self) -> Option<Node<'d>> {
        self.wrap(self.record().parent)
    }

    #[inline]
    pub fn first_child(&self) -> Option<Node<'d>> {
        self.wrap(self.record().first_child)
    }

    #[inline]
    pub fn last_child(&self) -> Option<Node<'d>> {
        self.wrap(self.record().last_child)
    }

    #[inline]
    pub fn next_sibling(&self) -> Option<Node<'d>> {
        self.wrap(self.record().next_sibling)
    }

    #[inline]
    pub fn previous_sibling(&self) -> Option<Node<'d>> {
        self.wrap(self.record().prev_sibling)
    }

    /// First child named `name` ("" = first child)
    pub fn first_child_named(&self, name: &str) -> Option<Node<'d>> {
        let first = self.first_child()?;
        if name.is_empty() || first.name() == name {
            Some(first)
        } else {
            first.next_sibling_named(name)
        }
    }

    /// Next sibling named `name` ("" = next sibling).
    ///
    /// The name is resolved to its interned id once, so the walk compares
    /// integers. A name the document never interned matches nothing.
    pub fn next_sibling_named(&self, name: &str) -> Option<Node<'d>> {
        if name.is_empty() {
            return self.next_sibling();
        }
        let name_id = self.doc.strings.lookup(name)?;
        let mut next = self.record().next_sibling;
        while let Some(id) = next {
            let node = &self.doc.nodes[id as usize];
            if node.name_id == name_id {
                return Some(Node::new(self.doc, id));
            }
            next = node.next_sibling;
        }
        None
    }

    #[inline]
    pub fn first_attribute(&self) -> Option<Attribute<'d>> {
        let record = self.record();
        record
            .has_attributes()
            .then(|| Attribute::new(self.doc, record.attr_start))
    }

    #[inline]
    pub fn last_attribute(&self) -> Option<Attribute<'d>> {
        let record = self.record();
        record
            .has_attributes()
            .then(|| Attribute::new(self.doc, record.attr_range().end - 1))
    }

    /// First attribute named `name`. Attribute names are never empty, so
    /// `""` finds nothing.
    pub fn attribute(&self, name: &str) -> Option<Attribute<'d>> {
        if name.is_empty() {
            return None;
        }
        let first = self.first_attribute()?;
        if first.name() == name {
            Some(first)
        } else {
            first.next_attribute_named(name)
        }
    }

    /// Cursor over all children
    #[inline]
    pub fn children(&self) -> SiblingCursor<Node<'d>> {
        SiblingCursor::new(*self)
    }

    /// Children named `name` ("" = all children)
    #[inline]
    pub fn children_named<'n>(&self, name: &'n str) -> NodeRange<'n, Node<'d>> {
        NodeRange::new(*self, name)
    }

    /// Cursor over all attributes
    #[inline]
    pub fn attributes(&self) -> AttributeCursor<Attribute<'d>> {
        AttributeCursor::new(*self)
    }

    /// Attributes named `name` ("" = all attributes)
    #[inline]
    pub fn attributes_named<'n>(&self, name: &'n str) -> AttributeRange<'n, Attribute<'d>> {
        AttributeRange::new(*self, name)
    }
}

impl PartialEq for Node<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.doc, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

impl<'d> TreeNode for Node<'d> {
    type Attribute = Attribute<'d>;

    #[inline]
    fn name(&self) -> &str {
        Node::name(self)
    }

    #[inline]
    fn first_child(&self) -> Option<Self> {
        Node::first_child(self)
    }

    #[inline]
    fn next_sibling(&self) -> Option<Self> {
        Node::next_sibling(self)
    }

    #[inline]
    fn previous_sibling(&self) -> Option<Self> {
        Node::previous_sibling(self)
    }

    #[inline]
    fn next_sibling_named(&self, name: &str) -> Option<Self> {
        Node::next_sibling_named(self, name)
    }

    #[inline]
    fn first_attribute(&self) -> Option<Self::Attribute> {
        Node::first_attribute(self)
    }
}

/// Borrowed handle to an attribute of an [`XmlDocument`]
#[derive(Clone, Copy)]
pub struct Attribute<'d> {
    doc: &'d XmlDocument,
    id: AttrId,
}

impl<'d> Attribute<'d> {
    #[inline]
    pub(super) fn new(doc: &'d XmlDocument, id: AttrId) -> Self {
        Attribute { doc, id }
    }

    #[inline]
    fn record(&self) -> &'d XmlAttribute {
        &self.doc.attributes[self.id as usize]
    }

    /// Arena index of this attribute
    #[inline]
    pub fn id(&self) -> AttrId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'d str {
        self.doc.strings.get_or_empty(self.record().name_id)
    }

    #[inline]
    pub fn value(&self) -> &'d str {
        self.doc.strings.get_or_empty(self.record().value_id)
    }

    /// Element carrying this attribute
    #[inline]
    pub fn owner(&self) -> Node<'d> {
        Node::new(self.doc, self.record().owner)
    }

    #[inline]
    pub fn next_attribute(&self) -> Option<Attribute<'d>> {
        let end = self.doc.nodes[self.record().owner as usize].attr_range().end;
        let next = self.id + 1;
        (next < end).then(|| Attribute::new(self.doc, next))
    }

    #[inline]
    pub fn previous_attribute(&self) -> Option<Attribute<'d>> {
        let start = self.doc.nodes[self.record().owner as usize].attr_start;
        (self.id > start).then(|| Attribute::new(self.doc, self.id - 1))
    }

    /// Next attribute of the same element named `name` ("" = next attribute)
    pub fn next_attribute_named(&self, name: &str) -> Option<Attribute<'d>> {
        if name.is_empty() {
            return self.next_attribute();
        }
        let name_id = self.doc.strings.lookup(name)?;
        let end = self.doc.nodes[self.record().owner as usize].attr_range().end;
        (self.id + 1..end)
            .find(|&id| self.doc.attributes[id as usize].name_id == name_id)
            .map(|id| Attribute::new(self.doc, id))
    }
}

impl PartialEq for Attribute<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Attribute<'_> {}

impl Hash for Attribute<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.doc, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

impl TreeAttribute for Attribute<'_> {
    #[inline]
    fn name(&self) -> &str {
        Attribute::name(self)
    }

    #[inline]
    fn next_attribute(&self) -> Option<Self> {
        Attribute::next_attribute(self)
    }

    #[inline]
    fn previous_attribute(&self) -> Option<Self> {
        Attribute::previous_attribute(self)
    }

    #[inline]
    fn next_attribute_named(&self, name: &str) -> Option<Self> {
        Attribute::next_attribute_named(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DocumentBuilder;

    fn sample() -> XmlDocument {
        let mut b = DocumentBuilder::new();
        b.start_element("svg:g")
            .unwrap()
            .attribute("id", "g1")
            .unwrap()
            .attribute("class", "c")
            .unwrap()
            .attribute("id", "g2")
            .unwrap();
        b.empty_element("a", &[]).unwrap();
        b.text("hi").unwrap();
        b.empty_element("b", &[("k", "v")]).unwrap();
        b.comment("note").unwrap();
        b.empty_element("a", &[]).unwrap();
        b.end_element("svg:g").unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn test_names() {
        let doc = sample();
        let root = doc.root().unwrap();
        assert_eq!(root.name(), "svg:g");
        assert_eq!(root.prefix(), Some("svg"));
        assert_eq!(root.local_name(), "g");

        let a = root.first_child().unwrap();
        assert_eq!(a.prefix(), None);
        assert_eq!(a.local_name(), "a");
    }

    #[test]
    fn test_data_nodes() {
        let doc = sample();
        let text = doc.root().unwrap().first_child().unwrap().next_sibling().unwrap();
        assert_eq!(text.kind(), NodeKind::Text);
        assert_eq!(text.name(), "");
        assert_eq!(text.value(), "hi");
        assert_eq!(text.depth(), 2);
        assert_eq!(text.parent(), doc.root());
    }

    #[test]
    fn test_links_are_symmetric() {
        let doc = sample();
        let root = doc.root().unwrap();
        let mut node = root.first_child();
        let mut count = 0;
        while let Some(n) = node {
            if let Some(next) = n.next_sibling() {
                assert_eq!(next.previous_sibling(), Some(n));
            } else {
                assert_eq!(root.last_child(), Some(n));
            }
            node = n.next_sibling();
            count += 1;
        }
        assert_eq!(count, 5);
        assert_eq!(doc.document().first_child(), doc.root());
        assert!(doc.document().parent().is_none());
    }

    #[test]
    fn test_next_sibling_named() {
        let doc = sample();
        let root = doc.root().unwrap();
        let first = root.first_child().unwrap();
        let second_a = first.next_sibling_named("a").unwrap();
        assert_ne!(first, second_a);
        assert_eq!(second_a, root.last_child().unwrap());
        assert!(second_a.next_sibling_named("a").is_none());
        assert!(first.next_sibling_named("missing").is_none());
        assert_eq!(first.next_sibling_named(""), first.next_sibling());
        assert_eq!(root.first_child_named("b").unwrap().name(), "b");
        assert_eq!(root.first_child_named(""), root.first_child());
    }

    #[test]
    fn test_attributes() {
        let doc = sample();
        let root = doc.root().unwrap();
        let first = root.first_attribute().unwrap();
        let last = root.last_attribute().unwrap();
        assert_eq!(first.value(), "g1");
        assert_eq!(last.value(), "g2");
        assert!(first.previous_attribute().is_none());
        assert!(last.next_attribute().is_none());
        assert_eq!(first.next_attribute_named("id"), Some(last));
        assert_eq!(first.next_attribute_named(""), first.next_attribute());
        assert_eq!(root.attribute("class").unwrap().value(), "c");
        assert!(root.attribute("nope").is_none());
        assert_eq!(first.owner(), root);
    }

    #[test]
    fn test_attribute_chain_stops_at_owner() {
        let doc = sample();
        let root = doc.root().unwrap();
        let b = root.first_child_named("b").unwrap();
        let k = b.first_attribute().unwrap();
        // root's attributes sit right before b's in the arena
        assert!(k.previous_attribute().is_none());
        assert!(k.next_attribute().is_none());
        assert!(root.last_attribute().unwrap().next_attribute_named("k").is_none());
    }

    #[test]
    fn test_attribute_lookup_with_empty_name() {
        let mut b = DocumentBuilder::new();
        b.empty_element("r", &[("x", "1"), ("y", "2")]).unwrap();
        let doc = b.finish().unwrap();
        let root = doc.root().unwrap();
        assert_eq!(root.attribute(""), None);
        assert_eq!(root.attribute("y").unwrap().value(), "2");
    }

    #[test]
    fn test_identity_across_documents() {
        let one = sample();
        let two = sample();
        let r1 = one.root().unwrap();
        let r2 = two.root().unwrap();
        assert_eq!(r1.id(), r2.id());
        assert_ne!(r1, r2);
        assert_ne!(r1.first_attribute(), r2.first_attribute());
    }

    #[test]
    fn test_convenience_views() {
        let doc = sample();
        let root = doc.root().unwrap();
        assert_eq!(root.children().count(), 5);
        assert_eq!(root.children_named("a").into_iter().count(), 2);
        assert_eq!(root.attributes().count(), 3);
        let ids: Vec<_> = root.attributes_named("id").into_iter().map(|a| a.value()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }
}
