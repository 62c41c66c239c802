//! RustyXML Iterators - cursors and filtered ranges over an XML tree
//!
//! Components:
//! - `SiblingCursor` / `AttributeCursor`: bidirectional cursors over the
//!   children or attributes of a node
//! - `node_range` / `attribute_range`: forward-only views filtered by name,
//!   terminated by a zero-sized end marker
//! - `dom`: arena document whose `Node` / `Attribute` handles the cursors
//!   walk
//!
//! Cursors and ranges hold a `Copy` handle and nothing else. They never
//! allocate and never touch the tree they traverse. Any tree can be walked
//! by implementing [`TreeNode`] and [`TreeAttribute`].
//!
//! ```
//! use rustyxml_iter::dom::DocumentBuilder;
//! use rustyxml_iter::node_range;
//!
//! let mut b = DocumentBuilder::new();
//! b.start_element("r")?;
//! b.empty_element("a", &[("n", "1")])?;
//! b.empty_element("b", &[])?;
//! b.empty_element("a", &[("n", "3")])?;
//! b.end_element("r")?;
//! let doc = b.finish()?;
//!
//! let root = doc.root().unwrap();
//! let ns: Vec<_> = node_range(root, "a")
//!     .into_iter()
//!     .filter_map(|a| a.attribute("n"))
//!     .map(|n| n.value())
//!     .collect();
//! assert_eq!(ns, ["1", "3"]);
//! # Ok::<(), rustyxml_iter::BuildError>(())
//! ```

pub mod dom;
pub mod error;
pub mod iter;
pub mod nav;

pub use error::{BuildError, BuildResult};
pub use iter::{
    attribute_range, node_range, AttributeBegin, AttributeCursor, AttributeEnd, AttributeRange,
    NodeBegin, NodeEnd, NodeRange, SiblingCursor,
};
pub use nav::{TreeAttribute, TreeNode};
