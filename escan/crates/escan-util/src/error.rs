//! Core error types for escan-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceMapError {
    /// Byte offset past the end of the source
    #[error("Offset out of bounds: offset {offset}, source has {len} bytes")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// Byte offset in the middle of a UTF-8 sequence
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
