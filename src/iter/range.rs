//! Name-filtered ranges over children and attributes
//!
//! A range is a begin state plus a zero-sized end marker. Termination is
//! `begin != end`, which only checks whether the begin state still holds a
//! candidate, so the end of a chain is never walked to up front.
//!
//! ```text
//! let mut it = range.begin();
//! while it != range.end() {
//!     visit(it.get());
//!     it.advance();
//! }
//! ```
//!
//! Both ranges also implement `IntoIterator`, so `for child in range` works.

use std::iter::FusedIterator;

use crate::nav::{TreeAttribute, TreeNode};

// ============================================================================
// Node ranges
// ============================================================================

/// End marker for [`NodeRange`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeEnd;

/// Forward-only filtered cursor over children
#[derive(Debug, Clone, Copy)]
pub struct NodeBegin<'n, N> {
    child: Option<N>,
    name: &'n str,
}

impl<'n, N: TreeNode> NodeBegin<'n, N> {
    /// Current child, or None at the end
    #[inline]
    pub fn current(&self) -> Option<N> {
        self.child
    }

    /// Current child; panics at the end
    #[inline]
    pub fn get(&self) -> N {
        match self.child {
            Some(child) => child,
            None => panic!("dereferenced a node range at its end"),
        }
    }

    /// Step to the next sibling matching the filter; panics at the end
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let child = match self.child {
            Some(child) => child,
            None => panic!("advanced a node range past its end"),
        };
        self.child = child.next_sibling_named(self.name);
        self
    }

    /// Filter name ("" when unfiltered)
    #[inline]
    pub fn name(&self) -> &'n str {
        self.name
    }
}

impl<N> PartialEq<NodeEnd> for NodeBegin<'_, N> {
    #[inline]
    fn eq(&self, _: &NodeEnd) -> bool {
        self.child.is_none()
    }
}

impl<N: TreeNode> Iterator for NodeBegin<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.child?;
        self.child = current.next_sibling_named(self.name);
        Some(current)
    }
}

impl<N: TreeNode> FusedIterator for NodeBegin<'_, N> {}

/// Children of a node, optionally restricted to one name
#[derive(Debug, Clone, Copy)]
pub struct NodeRange<'n, N> {
    first: Option<N>,
    name: &'n str,
}

impl<'n, N: TreeNode> NodeRange<'n, N> {
    /// Range over the children of `parent` named `name` ("" = all children).
    ///
    /// Only the raw first child is captured here; the filter is applied
    /// when iteration begins.
    #[inline]
    pub fn new(parent: N, name: &'n str) -> Self {
        NodeRange {
            first: parent.first_child(),
            name,
        }
    }

    /// Begin state, positioned on the first matching child
    #[inline]
    pub fn begin(&self) -> NodeBegin<'n, N> {
        let child = match self.first {
            Some(first) if !self.name.is_empty() && first.name() != self.name => {
                first.next_sibling_named(self.name)
            }
            first => first,
        };
        NodeBegin {
            child,
            name: self.name,
        }
    }

    /// End marker that `begin()` compares equal to once exhausted
    #[inline]
    pub fn end(&self) -> NodeEnd {
        NodeEnd
    }

    /// True if no child matches (walks at most to the first match)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }
}

impl<'n, N: TreeNode> IntoIterator for NodeRange<'n, N> {
    type Item = N;
    type IntoIter = NodeBegin<'n, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'n, N: TreeNode> IntoIterator for &NodeRange<'n, N> {
    type Item = N;
    type IntoIter = NodeBegin<'n, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// Children of `parent`, filtered by `name` unless it is empty
#[inline]
pub fn node_range<N: TreeNode>(parent: N, name: &str) -> NodeRange<'_, N> {
    NodeRange::new(parent, name)
}

// ============================================================================
// Attribute ranges
// ============================================================================

/// End marker for [`AttributeRange`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeEnd;

/// Forward-only filtered cursor over attributes
#[derive(Debug, Clone, Copy)]
pub struct AttributeBegin<'n, A> {
    attribute: Option<A>,
    name: &'n str,
}

impl<'n, A: TreeAttribute> AttributeBegin<'n, A> {
    /// Current attribute, or None at the end
    #[inline]
    pub fn current(&self) -> Option<A> {
        self.attribute
    }

    /// Current attribute; panics at the end
    #[inline]
    pub fn get(&self) -> A {
        match self.attribute {
            Some(attribute) => attribute,
            None => panic!("dereferenced an attribute range at its end"),
        }
    }

    /// Step to the next attribute matching the filter; panics at the end
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let attribute = match self.attribute {
            Some(attribute) => attribute,
            None => panic!("advanced an attribute range past its end"),
        };
        self.attribute = attribute.next_attribute_named(self.name);
        self
    }

    /// Filter name ("" when unfiltered)
    #[inline]
    pub fn name(&self) -> &'n str {
        self.name
    }
}

impl<A> PartialEq<AttributeEnd> for AttributeBegin<'_, A> {
    #[inline]
    fn eq(&self, _: &AttributeEnd) -> bool {
        self.attribute.is_none()
    }
}

impl<A: TreeAttribute> Iterator for AttributeBegin<'_, A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.attribute?;
        self.attribute = current.next_attribute_named(self.name);
        Some(current)
    }
}

impl<A: TreeAttribute> FusedIterator for AttributeBegin<'_, A> {}

/// Attributes of a node, optionally restricted to one name
#[derive(Debug, Clone, Copy)]
pub struct AttributeRange<'n, A> {
    first: Option<A>,
    name: &'n str,
}

impl<'n, A: TreeAttribute> AttributeRange<'n, A> {
    /// Range over the attributes of `node` named `name` ("" = all)
    #[inline]
    pub fn new<N>(node: N, name: &'n str) -> Self
    where
        N: TreeNode<Attribute = A>,
    {
        AttributeRange {
            first: node.first_attribute(),
            name,
        }
    }

    /// Begin state, positioned on the first matching attribute
    #[inline]
    pub fn begin(&self) -> AttributeBegin<'n, A> {
        let attribute = match self.first {
            Some(first) if !self.name.is_empty() && first.name() != self.name => {
                first.next_attribute_named(self.name)
            }
            first => first,
        };
        AttributeBegin {
            attribute,
            name: self.name,
        }
    }

    /// End marker that `begin()` compares equal to once exhausted
    #[inline]
    pub fn end(&self) -> AttributeEnd {
        AttributeEnd
    }

    /// True if no attribute matches (walks at most to the first match)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }
}

impl<'n, A: TreeAttribute> IntoIterator for AttributeRange<'n, A> {
    type Item = A;
    type IntoIter = AttributeBegin<'n, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'n, A: TreeAttribute> IntoIterator for &AttributeRange<'n, A> {
    type Item = A;
    type IntoIter = AttributeBegin<'n, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// Attributes of `node`, filtered by `name` unless it is empty
#[inline]
pub fn attribute_range<N: TreeNode>(node: N, name: &str) -> AttributeRange<'_, N::Attribute> {
    AttributeRange::new(node, name)
}
