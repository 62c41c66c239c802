//! DOM Module - Arena-based XML Document
//!
//! A concrete tree for the cursors and ranges to walk:
//! - Arena allocation for nodes and attributes
//! - NodeId (u32) indices for cache-friendly traversal
//! - String interning for names, values and text
//! - `Node` / `Attribute` handles implementing the navigation contract
//!
//! Documents are assembled with `DocumentBuilder` and never change after
//! `finish()`.

pub mod builder;
pub mod document;
pub mod handle;
pub mod node;
pub mod strings;

pub use builder::{BuildOptions, DocumentBuilder};
pub use document::XmlDocument;
pub use handle::{Attribute, Node};
pub use node::{AttrId, NodeId, NodeKind, XmlAttribute, XmlNode};
pub use strings::StringPool;
