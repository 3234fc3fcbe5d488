//! Error types

use crate::element::NodeId;

/// Errors raised by document operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomError {
    /// The handle does not belong to this document.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// Errors raised while parsing a selector.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    /// Combinators and selector lists are not supported.
    #[error("unsupported character {found:?} at offset {offset} in {input:?}")]
    Unsupported {
        input: String,
        found: char,
        offset: usize,
    },

    /// A `.`, `#` or `[` with no name after it.
    #[error("missing name after {prefix:?} at offset {offset} in {input:?}")]
    MissingName {
        input: String,
        prefix: char,
        offset: usize,
    },

    #[error("unclosed attribute selector in {0:?}")]
    UnclosedAttribute(String),
}
