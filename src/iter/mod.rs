//! Traversal Module - cursors and filtered ranges
//!
//! Everything here is generic over the [`crate::nav`] contract and works on
//! `Copy` handles only:
//! - `SiblingCursor` / `AttributeCursor`: bidirectional, unfiltered
//! - `NodeRange` / `AttributeRange`: forward-only, filtered by name, ended
//!   by a zero-sized sentinel
//!
//! No operation here allocates. Misuse (stepping or reading past the end,
//! retreating before the first element) panics.

pub mod cursor;
pub mod range;

pub use cursor::{AttributeCursor, SiblingCursor};
pub use range::{
    attribute_range, node_range, AttributeBegin, AttributeEnd, AttributeRange, NodeBegin, NodeEnd,
    NodeRange,
};
