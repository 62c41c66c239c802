//! Document Builder
//!
//! Appends nodes to an arena document in document order, the way a parser
//! emits events: start tag, attributes, content, end tag. Two modes:
//! - Lenient (default): recovers from stray or mismatched end tags and
//!   closes unfinished elements on `finish()`
//! - Strict: rejects anything that would not be well-formed XML
//!
//! Attributes may only follow their start tag directly, which keeps each
//! element's attributes contiguous in the attribute arena. A builder that
//! returned an error may hold a half-built element; discard it.

use tracing::{debug, warn};

use super::document::XmlDocument;
use super::node::{NodeId, NodeKind, XmlAttribute, XmlNode};
use crate::error::{BuildError, BuildResult};

/// Builder configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Reject malformed structure instead of recovering
    pub strict: bool,
    /// Drop text nodes that contain only whitespace
    pub skip_whitespace_text: bool,
}

impl BuildOptions {
    /// Strict mode, whitespace text kept
    pub fn strict() -> Self {
        BuildOptions {
            strict: true,
            ..Self::default()
        }
    }
}

/// Incremental constructor for [`XmlDocument`]
#[derive(Debug)]
pub struct DocumentBuilder {
    doc: XmlDocument,
    options: BuildOptions,
    /// Open elements, starting with the document node
    stack: Vec<NodeId>,
    /// Whether the element on top of the stack still accepts attributes
    tag_open: bool,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Create a lenient builder
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    pub fn with_options(options: BuildOptions) -> Self {
        DocumentBuilder {
            doc: XmlDocument::empty(),
            options,
            stack: vec![0],
            tag_open: false,
        }
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Current nesting depth (0 at document level)
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    #[inline]
    fn parent(&self) -> NodeId {
        *self.stack.last().unwrap_or(&0)
    }

    /// Depth recorded on a node appended now; saturates at `u16::MAX`
    #[inline]
    fn node_depth(&self) -> u16 {
        u16::try_from(self.stack.len()).unwrap_or(u16::MAX)
    }

    #[inline]
    fn at_document_level(&self) -> bool {
        self.stack.len() == 1
    }

    fn node_name(&self, id: NodeId) -> String {
        let name_id = self.doc.nodes[id as usize].name_id;
        self.doc.strings.get_or_empty(name_id).to_string()
    }

    /// Log and return a construction error
    fn reject(&self, err: BuildError) -> BuildError {
        warn!(error = %err, strict = self.options.strict, "document rejected");
        err
    }

    /// Open an element: `<name`
    pub fn start_element(&mut self, name: &str) -> BuildResult<&mut Self> {
        if name.is_empty() {
            return Err(self.reject(BuildError::EmptyName));
        }

        if self.at_document_level() && self.doc.root_element.is_some() {
            if self.options.strict {
                return Err(self.reject(BuildError::MultipleRoots));
            }
            debug!(name, "lenient: accepting additional top-level element");
        }

        let parent_id = self.parent();
        let depth = self.node_depth();
        let name_id = self.doc.strings.intern(name);

        let mut node = XmlNode::element(name_id, Some(parent_id), depth);
        node.attr_start = self.doc.attributes.len() as u32;
        let node_id = self.doc.push_child(parent_id, node);

        // Track root element
        if self.doc.root_element.is_none() && parent_id == 0 {
            self.doc.root_element = Some(node_id);
        }

        self.stack.push(node_id);
        self.tag_open = true;
        Ok(self)
    }

    /// Add an attribute to the element whose start tag is still open
    pub fn attribute(&mut self, name: &str, value: &str) -> BuildResult<&mut Self> {
        if name.is_empty() {
            return Err(self.reject(BuildError::EmptyName));
        }
        if self.at_document_level() {
            return Err(self.reject(BuildError::AttributeOutsideElement(name.to_string())));
        }
        if !self.tag_open {
            return Err(self.reject(BuildError::AttributeAfterContent(name.to_string())));
        }

        let owner = self.parent();
        let name_id = self.doc.strings.intern(name);

        // Check for duplicate attributes in strict mode
        if self.options.strict {
            let range = self.doc.nodes[owner as usize].attr_range();
            let duplicate = self.doc.attributes[range.start as usize..range.end as usize]
                .iter()
                .any(|attr| attr.name_id == name_id);
            if duplicate {
                return Err(self.reject(BuildError::DuplicateAttribute(name.to_string())));
            }
        }

        let value_id = self.doc.strings.intern(value);
        self.doc
            .attributes
            .push(XmlAttribute::new(owner, name_id, value_id));
        self.doc.nodes[owner as usize].attr_count += 1;
        Ok(self)
    }

    /// Close the innermost open element: `</name>`
    pub fn end_element(&mut self, name: &str) -> BuildResult<&mut Self> {
        if self.at_document_level() {
            if self.options.strict {
                return Err(self.reject(BuildError::UnexpectedEndTag(name.to_string())));
            }
            debug!(name, "lenient: ignoring end tag with no open element");
            return Ok(self);
        }

        let open_id = self.parent();
        let open_name_id = self.doc.nodes[open_id as usize].name_id;
        if self.doc.strings.get_str(open_name_id) != Some(name) {
            let open = self.node_name(open_id);
            if self.options.strict {
                return Err(self.reject(BuildError::TagMismatch {
                    open,
                    close: name.to_string(),
                }));
            }
            debug!(open = %open, close = name, "lenient: closing mismatched element");
        }

        self.stack.pop();
        self.tag_open = false;
        Ok(self)
    }

    /// Element with attributes and no content: `<name a="v"/>`
    pub fn empty_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> BuildResult<&mut Self> {
        self.start_element(name)?;
        for (attr_name, value) in attributes {
            self.attribute(attr_name, value)?;
        }
        self.stack.pop();
        self.tag_open = false;
        Ok(self)
    }

    /// Append a data node under the innermost open element
    fn push_data(&mut self, kind: NodeKind, content: &str) -> NodeId {
        let parent_id = self.parent();
        let depth = self.node_depth();
        let value_id = self.doc.strings.intern(content);
        self.tag_open = false;
        self.doc
            .push_child(parent_id, XmlNode::data(kind, value_id, Some(parent_id), depth))
    }

    /// Character data
    pub fn text(&mut self, content: &str) -> BuildResult<&mut Self> {
        let is_whitespace = content
            .bytes()
            .all(|b| b == b' ' || b == b'\t' || b == b'\n' || b == b'\r');

        if self.at_document_level() {
            if is_whitespace {
                return Ok(self);
            }
            if self.options.strict {
                let err = if self.doc.root_element.is_some() {
                    BuildError::ContentAfterRoot
                } else {
                    BuildError::TextAtDocumentLevel
                };
                return Err(self.reject(err));
            }
            debug!("lenient: keeping text at document level");
        }

        if is_whitespace && self.options.skip_whitespace_text {
            return Ok(self);
        }

        self.push_data(NodeKind::Text, content);
        Ok(self)
    }

    /// CDATA section
    pub fn cdata(&mut self, content: &str) -> BuildResult<&mut Self> {
        // In strict mode, CDATA is not allowed at document level
        if self.at_document_level() && self.options.strict {
            return Err(self.reject(BuildError::TextAtDocumentLevel));
        }
        self.push_data(NodeKind::CData, content);
        Ok(self)
    }

    pub fn comment(&mut self, content: &str) -> BuildResult<&mut Self> {
        self.push_data(NodeKind::Comment, content);
        Ok(self)
    }

    /// Processing instruction: `<?target data?>`
    pub fn processing_instruction(
        &mut self,
        target: &str,
        data: &str,
    ) -> BuildResult<&mut Self> {
        if target.is_empty() {
            return Err(self.reject(BuildError::EmptyName));
        }
        let parent_id = self.parent();
        let depth = self.node_depth();
        let target_id = self.doc.strings.intern(target);
        let data_id = self.doc.strings.intern(data);
        let node = XmlNode::processing_instruction(target_id, data_id, Some(parent_id), depth);
        self.doc.push_child(parent_id, node);
        self.tag_open = false;
        Ok(self)
    }

    /// Freeze the document
    pub fn finish(self) -> BuildResult<XmlDocument> {
        if let Some(&outermost) = self.stack.get(1) {
            if self.options.strict {
                let name = self.node_name(outermost);
                return Err(self.reject(BuildError::UnclosedTag(name)));
            }
            debug!(open = self.depth(), "lenient: closing unfinished elements");
        }

        if self.options.strict && self.doc.root_element.is_none() {
            return Err(self.reject(BuildError::NoRootElement));
        }

        debug!(
            nodes = self.doc.node_count(),
            attributes = self.doc.attribute_count(),
            strings = self.doc.strings.len(),
            "document built"
        );
        Ok(self.doc)
    }
}
