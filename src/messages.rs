//! Message types for the Elm-style architecture
//!
//! A presentation layer expresses every request against the buffer as an
//! [`EditMsg`] and hands it to [`update`](crate::update::update).

use crate::edit::TextPosition;

/// Editing requests, all addressed with 0-based lines and character columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Splice text into a single line
    InsertString {
        line: usize,
        column: usize,
        text: String,
    },
    /// Insert a block of lines at a position, splitting the target line
    InsertTextBlock {
        line: usize,
        column: usize,
        block: Vec<String>,
    },
    /// Remove up to `length` characters from one line
    DeleteChars {
        line: usize,
        start_col: usize,
        length: usize,
    },
    /// Remove the text between two positions, merging the boundary lines
    DeleteTextBlock {
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    },
    /// Relocate whole lines `start..=end` before line `target`
    MoveLineBlock {
        start: usize,
        end: usize,
        target: usize,
    },
    /// Relocate a rectangular column region
    MoveColumnBlock {
        start_line: usize,
        end_line: usize,
        start_col: usize,
        end_col: usize,
        target_line: usize,
        target_col: usize,
    },
    /// Search without modifying the buffer
    Find { pattern: String },
    /// Replace every occurrence on every line
    Replace { target: String, replacement: String },
    /// Replace the whole buffer (e.g. after the storage layer loads a file)
    SetContent(String),
}

impl EditMsg {
    /// Short name for log output
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertString { .. } => "insert_string",
            Self::InsertTextBlock { .. } => "insert_text_block",
            Self::DeleteChars { .. } => "delete_chars",
            Self::DeleteTextBlock { .. } => "delete_text_block",
            Self::MoveLineBlock { .. } => "move_line_block",
            Self::MoveColumnBlock { .. } => "move_column_block",
            Self::Find { .. } => "find",
            Self::Replace { .. } => "replace",
            Self::SetContent(_) => "set_content",
        }
    }
}

/// What applying an [`EditMsg`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The buffer was edited in place
    Edited,
    /// A replace-all finished; counts lines, not occurrences
    Replaced { lines_modified: usize },
    /// Search results in buffer order
    Matches(Vec<TextPosition>),
}
