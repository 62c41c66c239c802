//! Document construction errors
//!
//! Traversal never fails: stepping past the end of a cursor or range is a
//! bug in the caller and panics. Only building a document can fail.

use thiserror::Error;

/// Error returned by [`crate::dom::DocumentBuilder`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("element and attribute names must not be empty")]
    EmptyName,

    #[error("attribute {0:?} given with no open start tag")]
    AttributeOutsideElement(String),

    #[error("attribute {0:?} given after the element's content started")]
    AttributeAfterContent(String),

    #[error("duplicate attribute: {0}")]
    DuplicateAttribute(String),

    #[error("document has multiple root elements")]
    MultipleRoots,

    #[error("content not allowed after root element")]
    ContentAfterRoot,

    #[error("text content not allowed at document level")]
    TextAtDocumentLevel,

    #[error("tag mismatch: <{open}> closed with </{close}>")]
    TagMismatch { open: String, close: String },

    #[error("unexpected end tag: </{0}> without matching start tag")]
    UnexpectedEndTag(String),

    #[error("unclosed tag: <{0}>")]
    UnclosedTag(String),

    #[error("document has no root element")]
    NoRootElement,
}

/// Result alias for builder operations
pub type BuildResult<T> = Result<T, BuildError>;
