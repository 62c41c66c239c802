//! Navigation contract
//!
//! The read-only operations the cursors and ranges need from a tree.
//! Implementors hand out small `Copy` handles; equality on a handle must be
//! identity (same element), never structural.
//!
//! The arena document in [`crate::dom`] implements both traits, but any tree
//! with doubly-linked siblings can plug in.

/// A node handle in a tree with ordered children and attributes
pub trait TreeNode: Copy + Eq {
    /// Handle type for this node's attributes
    type Attribute: TreeAttribute;

    /// Name of the node ("" for unnamed nodes such as text)
    fn name(&self) -> &str;

    /// First child, or None if childless
    fn first_child(&self) -> Option<Self>;

    /// Next sibling in document order
    fn next_sibling(&self) -> Option<Self>;

    /// Previous sibling in document order
    fn previous_sibling(&self) -> Option<Self>;

    /// First following sibling whose name equals `name`.
    ///
    /// An empty `name` disables filtering and must behave exactly like
    /// [`TreeNode::next_sibling`].
    fn next_sibling_named(&self, name: &str) -> Option<Self>;

    /// First attribute, or None if the node has none
    fn first_attribute(&self) -> Option<Self::Attribute>;
}

/// An attribute handle, ordered among the attributes of one node
pub trait TreeAttribute: Copy + Eq {
    /// Attribute name
    fn name(&self) -> &str;

    /// Next attribute of the same node
    fn next_attribute(&self) -> Option<Self>;

    /// Previous attribute of the same node
    fn previous_attribute(&self) -> Option<Self>;

    /// First following attribute whose name equals `name` ("" = no filter)
    fn next_attribute_named(&self, name: &str) -> Option<Self>;
}
