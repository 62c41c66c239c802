//! Bidirectional cursors over sibling and attribute chains
//!
//! A cursor is an `Option` of a handle and nothing else, so copying one is
//! a register copy and two cursors compare equal exactly when they point at
//! the same element (or are both past the end).

use std::iter::FusedIterator;

use crate::nav::{TreeAttribute, TreeNode};

/// Cursor over the children of a node, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingCursor<N> {
    node: Option<N>,
}

impl<N: TreeNode> SiblingCursor<N> {
    /// Cursor at the first child of `parent` (past the end if childless)
    #[inline]
    pub fn new(parent: N) -> Self {
        SiblingCursor {
            node: parent.first_child(),
        }
    }

    /// Current node, or None past the end
    #[inline]
    pub fn current(&self) -> Option<N> {
        self.node
    }

    /// Current node.
    ///
    /// Panics if the cursor is past the end.
    #[inline]
    pub fn get(&self) -> N {
        match self.node {
            Some(node) => node,
            None => panic!("dereferenced a sibling cursor past the end"),
        }
    }

    /// Move to the next sibling, which may be past the end.
    ///
    /// Panics if the cursor is already past the end.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let node = match self.node {
            Some(node) => node,
            None => panic!("advanced a sibling cursor past the end"),
        };
        self.node = node.next_sibling();
        self
    }

    /// Move to the previous sibling.
    ///
    /// Panics if the cursor is past the end or already at the first child.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        let prev = self.node.and_then(|node| node.previous_sibling());
        assert!(
            prev.is_some(),
            "retreated a sibling cursor with no previous sibling"
        );
        self.node = prev;
        self
    }
}

impl<N> Default for SiblingCursor<N> {
    fn default() -> Self {
        SiblingCursor { node: None }
    }
}

impl<N: TreeNode> Iterator for SiblingCursor<N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.node?;
        self.node = current.next_sibling();
        Some(current)
    }
}

impl<N: TreeNode> FusedIterator for SiblingCursor<N> {}

/// Cursor over the attributes of a node, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeCursor<A> {
    attribute: Option<A>,
}

impl<A: TreeAttribute> AttributeCursor<A> {
    /// Cursor at the first attribute of `node`
    #[inline]
    pub fn new<N>(node: N) -> Self
    where
        N: TreeNode<Attribute = A>,
    {
        AttributeCursor {
            attribute: node.first_attribute(),
        }
    }

    /// Current attribute, or None past the end
    #[inline]
    pub fn current(&self) -> Option<A> {
        self.attribute
    }

    /// Current attribute; panics past the end
    #[inline]
    pub fn get(&self) -> A {
        match self.attribute {
            Some(attribute) => attribute,
            None => panic!("dereferenced an attribute cursor past the end"),
        }
    }

    /// Move to the next attribute; panics past the end
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let attribute = match self.attribute {
            Some(attribute) => attribute,
            None => panic!("advanced an attribute cursor past the end"),
        };
        self.attribute = attribute.next_attribute();
        self
    }

    /// Move to the previous attribute; panics past the end or at the first
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        let prev = self.attribute.and_then(|attr| attr.previous_attribute());
        assert!(
            prev.is_some(),
            "retreated an attribute cursor with no previous attribute"
        );
        self.attribute = prev;
        self
    }
}

impl<A> Default for AttributeCursor<A> {
    fn default() -> Self {
        AttributeCursor { attribute: None }
    }
}

impl<A: TreeAttribute> Iterator for AttributeCursor<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.attribute?;
        self.attribute = current.next_attribute();
        Some(current)
    }
}

impl<A: TreeAttribute> FusedIterator for AttributeCursor<A> {}
