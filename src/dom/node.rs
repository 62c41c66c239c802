//! XML Node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references.
//! Siblings are doubly linked; attributes of one node are contiguous in the
//! attribute arena, so their order is their index order.

/// Compact node identifier (index into arena)
pub type NodeId = u32;

/// Compact attribute identifier (index into attribute arena)
pub type AttrId = u32;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element,
    /// Text content
    Text,
    /// CDATA section
    CData,
    /// Comment
    Comment,
    /// Processing instruction
    ProcessingInstruction,
}

/// An XML node in the arena
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Type of this node
    pub kind: NodeKind,
    /// Parent node (None for document root)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// String pool id of the name (elements, PI targets), 0 otherwise
    pub name_id: u32,
    /// String pool id of the value (text, CDATA, comment, PI data), 0 otherwise
    pub value_id: u32,
    /// Start of attributes in attribute arena
    pub attr_start: AttrId,
    /// Number of attributes
    pub attr_count: u32,
    /// Depth in document tree, saturating at `u16::MAX`
    pub depth: u16,
}

impl XmlNode {
    fn new(kind: NodeKind, parent: Option<NodeId>, depth: u16) -> Self {
        XmlNode {
            kind,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id: 0,
            value_id: 0,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    /// Create a new document root node
    pub fn document() -> Self {
        Self::new(NodeKind::Document, None, 0)
    }

    /// Create a new element node
    pub fn element(name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        XmlNode {
            name_id,
            ..Self::new(NodeKind::Element, parent, depth)
        }
    }

    /// Create a data node (text, CDATA or comment) holding `value_id`
    pub fn data(kind: NodeKind, value_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        debug_assert!(matches!(
            kind,
            NodeKind::Text | NodeKind::CData | NodeKind::Comment
        ));
        XmlNode {
            value_id,
            ..Self::new(kind, parent, depth)
        }
    }

    /// Create a processing instruction node
    pub fn processing_instruction(
        target_id: u32,
        data_id: u32,
        parent: Option<NodeId>,
        depth: u16,
    ) -> Self {
        XmlNode {
            name_id: target_id,
            value_id: data_id,
            ..Self::new(NodeKind::ProcessingInstruction, parent, depth)
        }
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.attr_count > 0
    }

    /// Attribute id range of this node
    #[inline]
    pub fn attr_range(&self) -> std::ops::Range<AttrId> {
        self.attr_start..self.attr_start + self.attr_count
    }
}

/// Stored attribute
#[derive(Debug, Clone)]
pub struct XmlAttribute {
    /// Element the attribute belongs to
    pub owner: NodeId,
    /// Index into string pool for attribute name
    pub name_id: u32,
    /// Index into string pool for attribute value
    pub value_id: u32,
}

impl XmlAttribute {
    pub fn new(owner: NodeId, name_id: u32, value_id: u32) -> Self {
        XmlAttribute {
            owner,
            name_id,
            value_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let doc = XmlNode::document();
        assert_eq!(doc.kind, NodeKind::Document);
        assert!(doc.parent.is_none());
        assert_eq!(doc.depth, 0);
    }

    #[test]
    fn test_element_node() {
        let elem = XmlNode::element(1, Some(0), 1);
        assert_eq!(elem.kind, NodeKind::Element);
        assert_eq!(elem.parent, Some(0));
        assert_eq!(elem.name_id, 1);
        assert_eq!(elem.depth, 1);
        assert!(elem.is_element());
        assert!(!elem.has_children());
    }

    #[test]
    fn test_data_node_has_no_name() {
        let text = XmlNode::data(NodeKind::Text, 7, Some(1), 2);
        assert_eq!(text.name_id, 0);
        assert_eq!(text.value_id, 7);
        assert!(!text.is_element());
    }

    #[test]
    fn test_attr_range() {
        let mut elem = XmlNode::element(1, Some(0), 1);
        assert!(!elem.has_attributes());
        assert!(elem.attr_range().is_empty());
        elem.attr_start = 4;
        elem.attr_count = 3;
        assert!(elem.has_attributes());
        assert_eq!(elem.attr_range(), 4..7);
    }
}
