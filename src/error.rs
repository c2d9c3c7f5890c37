//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting between markdown and the element tree
///
/// Both variants indicate a bug in tree construction upstream, never malformed
/// user input: the serializer raises `InvalidStructure` when a child-only
/// element kind reaches a dispatch point it must not, and the parser raises
/// `UnsupportedBlock` when the grammar engine hands over a block node kind
/// that has no branch. Neither is recoverable and neither is caught
/// internally; they propagate to the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A structurally misplaced element was found during serialization
    InvalidStructure(String),
    /// An AST block node without a corresponding parser branch was found
    UnsupportedBlock(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidStructure(msg) => write!(f, "Invalid document structure: {msg}"),
            ConvertError::UnsupportedBlock(msg) => write!(f, "Unsupported block node: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
