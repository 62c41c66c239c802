//! XML Document - Arena-based DOM representation
//!
//! Efficient DOM storage with:
//! - Arena allocation for nodes and attributes
//! - NodeId indices for traversal
//! - String interning for names and text
//!
//! A document is frozen once built. Traversal goes through the `Node` and
//! `Attribute` handles, which borrow the document.

use super::handle::{Attribute, Node};
use super::node::{AttrId, NodeId, XmlAttribute, XmlNode};
use super::strings::StringPool;

/// An XML document stored in arena format
#[derive(Debug)]
pub struct XmlDocument {
    /// Arena of nodes; index 0 is the document node
    pub(super) nodes: Vec<XmlNode>,
    /// Arena of attributes
    pub(super) attributes: Vec<XmlAttribute>,
    /// Interned strings
    pub(super) strings: StringPool,
    /// Root element node ID (not document node)
    pub(super) root_element: Option<NodeId>,
}

impl XmlDocument {
    /// Empty document holding only the document node
    pub(super) fn empty() -> Self {
        let mut nodes = Vec::with_capacity(256);
        nodes.push(XmlNode::document());
        XmlDocument {
            nodes,
            attributes: Vec::with_capacity(128),
            strings: StringPool::new(),
            root_element: None,
        }
    }

    /// Append a node to the arena and link it under `parent_id`
    pub(super) fn push_child(&mut self, parent_id: NodeId, node: XmlNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        self.link_child(parent_id, node_id);
        node_id
    }

    /// Link a child node to its parent
    fn link_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        // Get parent's last_child first to avoid borrow issues
        let last_child_opt = self.nodes[parent_id as usize].last_child;

        if let Some(last_child_id) = last_child_opt {
            // Link to previous sibling
            self.nodes[child_id as usize].prev_sibling = Some(last_child_id);
            self.nodes[last_child_id as usize].next_sibling = Some(child_id);
        } else {
            // First child
            self.nodes[parent_id as usize].first_child = Some(child_id);
        }
        self.nodes[parent_id as usize].last_child = Some(child_id);
    }

    /// Handle of the document node (parent of the root element)
    #[inline]
    pub fn document(&self) -> Node<'_> {
        Node::new(self, 0)
    }

    /// Handle of the root element
    #[inline]
    pub fn root(&self) -> Option<Node<'_>> {
        self.root_element.map(|id| Node::new(self, id))
    }

    /// Handle of a node by ID
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        if (id as usize) < self.nodes.len() {
            Some(Node::new(self, id))
        } else {
            None
        }
    }

    /// Handle of an attribute by ID
    pub fn attribute(&self, id: AttrId) -> Option<Attribute<'_>> {
        if (id as usize) < self.attributes.len() {
            Some(Attribute::new(self, id))
        } else {
            None
        }
    }

    /// Get a raw node record by ID
    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&XmlNode> {
        self.nodes.get(id as usize)
    }

    /// Get a raw attribute record by ID
    #[inline]
    pub fn get_attribute(&self, id: AttrId) -> Option<&XmlAttribute> {
        self.attributes.get(id as usize)
    }

    /// Get root element ID
    pub fn root_element_id(&self) -> Option<NodeId> {
        self.root_element
    }

    /// Get root element name
    pub fn root_name(&self) -> Option<&str> {
        self.root().map(|node| node.name())
    }

    /// Get total number of nodes (including the document node)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// The string pool
    pub fn strings(&self) -> &StringPool {
        &self.strings
    }
}
