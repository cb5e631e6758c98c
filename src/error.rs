//! Error types for the editing core
//!
//! Every failure is either a range violation (an index past its bound) or an
//! invalid argument (an inverted range, an empty pattern, single-line text
//! carrying a line separator, a move target that lands inside its own block).

use thiserror::Error;

/// Result alias used by every editing operation
pub type Result<T> = std::result::Result<T, EditError>;

/// Broad classification of an [`EditError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A line or column index outside its valid bound
    Range,
    /// An argument that is malformed regardless of buffer contents
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("line {line} out of range (buffer has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("column {column} out of range for line {line} (length {line_len})")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        line_len: usize,
    },

    #[error("{what} range is inverted: end {end} is before start {start}")]
    InvertedRange {
        what: &'static str,
        start: usize,
        end: usize,
    },

    #[error("target line {target} falls inside the moved block {start}..={end}")]
    TargetInsideBlock {
        start: usize,
        end: usize,
        target: usize,
    },

    #[error("search pattern must not be empty")]
    EmptyPattern,

    #[error("text for a single line must not contain a line separator")]
    EmbeddedSeparator,
}

impl EditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LineOutOfRange { .. } | Self::ColumnOutOfRange { .. } => ErrorKind::Range,
            Self::InvertedRange { .. }
            | Self::TargetInsideBlock { .. }
            | Self::EmptyPattern
            | Self::EmbeddedSeparator => ErrorKind::InvalidArgument,
        }
    }
}
