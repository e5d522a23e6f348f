//! Parse error types.

use thiserror::Error;

/// An error that occurred while parsing a component file.
#[derive(Debug, Clone, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The byte offset in the source where the error occurred.
    pub offset: usize,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Error)]
pub enum ParseErrorKind {
    /// A block's closing tag was never found.
    #[error("unclosed block: <{tag_name}>")]
    UnclosedBlock {
        /// The name of the unclosed block.
        tag_name: String,
    },

    /// A block that may appear at most once appeared again.
    #[error("duplicate block: <{tag_name}>")]
    DuplicateBlock {
        /// The name of the duplicated block.
        tag_name: String,
    },

    /// An opening tag was malformed.
    #[error("malformed tag: {message}")]
    MalformedTag {
        /// A description of the problem.
        message: String,
    },

    /// A closing tag appeared with no matching open block.
    #[error("stray closing tag: </{tag_name}>")]
    StrayClosingTag {
        /// The name of the stray closing tag.
        tag_name: String,
    },
}
