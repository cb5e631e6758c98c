//! Line-addressed text buffer
//!
//! The buffer is an ordered sequence of lines that never contain the line
//! separator. It always holds at least one (possibly empty) line.

use std::ops::RangeInclusive;

use crate::error::{EditError, Result};
use crate::util::text::{char_len, split_at_col};

/// Separator used to join and split lines when converting to/from a flat string
pub const LINE_SEPARATOR: &str = "\n";

/// Reject text meant for a single line if it carries a separator
pub(crate) fn check_single_line(text: &str) -> Result<()> {
    if text.contains(LINE_SEPARATOR) {
        return Err(EditError::EmbeddedSeparator);
    }
    Ok(())
}

/// Ordered line store shared by every editing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    /// Create a buffer holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a buffer from separator-joined text
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_content_from_str(text);
        buffer
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line content, or `None` if `index` is past the last line
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Line content, treating a missing line as empty text
    pub fn line_or_empty(&self, index: usize) -> &str {
        self.line(index).unwrap_or("")
    }

    /// Length of a line in characters, `None` if the line does not exist
    pub fn line_len(&self, index: usize) -> Option<usize> {
        self.line(index).map(char_len)
    }

    /// Iterate over all lines in order
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Insert a new line at `index`, shifting later lines down.
    ///
    /// `index == line_count()` appends. Any larger index is ignored. Text
    /// containing the separator is rejected.
    pub fn insert_line(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        check_single_line(&text)?;
        if index > self.lines.len() {
            tracing::debug!(
                index,
                line_count = self.lines.len(),
                "insert_line past end ignored"
            );
            return Ok(());
        }
        self.lines.insert(index, text);
        Ok(())
    }

    /// Remove the line at `index` and return its content.
    ///
    /// Removing the only line leaves a single empty line behind.
    pub fn delete_line(&mut self, index: usize) -> Result<String> {
        self.check_line(index)?;
        let removed = self.lines.remove(index);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        Ok(removed)
    }

    /// Replace a line's content wholesale
    pub fn update_line(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.check_line(index)?;
        let text = text.into();
        check_single_line(&text)?;
        self.lines[index] = text;
        Ok(())
    }

    /// Replace the whole buffer by splitting `content` on the separator.
    ///
    /// Trailing empty segments are kept: `"a\n"` yields `["a", ""]` and `""`
    /// yields a single empty line.
    pub fn set_content_from_str(&mut self, content: &str) {
        self.lines = content.split(LINE_SEPARATOR).map(String::from).collect();
    }

    /// Join all lines with a single separator, no trailing separator
    pub fn content_as_string(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }

    /// Remove an inclusive range of lines in one step and return them in order.
    ///
    /// The at-least-one-line invariant is restored if the range covered
    /// the whole buffer.
    pub fn remove_lines(&mut self, range: RangeInclusive<usize>) -> Result<Vec<String>> {
        let (start, end) = (*range.start(), *range.end());
        if end < start {
            return Err(EditError::InvertedRange {
                what: "line",
                start,
                end,
            });
        }
        self.check_line(end)?;
        let removed: Vec<String> = self.lines.drain(start..=end).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        Ok(removed)
    }

    /// Insert `lines` starting at `index`, preserving their order
    pub fn insert_lines(&mut self, index: usize, lines: Vec<String>) -> Result<()> {
        if index > self.lines.len() {
            return Err(EditError::LineOutOfRange {
                line: index,
                line_count: self.lines.len(),
            });
        }
        for line in &lines {
            check_single_line(line)?;
        }
        self.lines.splice(index..index, lines);
        Ok(())
    }

    /// Append empty lines until `index` is a valid line
    pub(crate) fn grow_to(&mut self, index: usize) {
        while self.lines.len() <= index {
            self.lines.push(String::new());
        }
    }

    /// Content of line `index`, or a range error
    pub(crate) fn checked_line(&self, index: usize) -> Result<&str> {
        self.line(index).ok_or(EditError::LineOutOfRange {
            line: index,
            line_count: self.lines.len(),
        })
    }

    /// Split line `index` at `column`, validating both
    pub(crate) fn split_line_at(&self, index: usize, column: usize) -> Result<(&str, &str)> {
        let line = self.checked_line(index)?;
        let line_len = char_len(line);
        if column > line_len {
            return Err(EditError::ColumnOutOfRange {
                line: index,
                column,
                line_len,
            });
        }
        Ok(split_at_col(line, column))
    }

    fn check_line(&self, index: usize) -> Result<()> {
        self.checked_line(index).map(|_| ())
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
