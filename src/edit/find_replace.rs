//! Substring search and whole-line replace-all

use crate::buffer::{check_single_line, Buffer};
use crate::error::{EditError, Result};
use crate::util::text::char_len;

/// One match span: line index, starting character column and length in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextPosition {
    line: usize,
    column: usize,
    length: usize,
}

impl TextPosition {
    pub const fn new(line: usize, column: usize, length: usize) -> Self {
        Self {
            line,
            column,
            length,
        }
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// Column just past the end of the match
    pub const fn end_column(&self) -> usize {
        self.column + self.length
    }
}

/// Find every non-overlapping occurrence of `pattern`, top to bottom, left to right.
///
/// Scanning resumes after the end of each match, so `"aa"` occurs once in `"aaa"`.
pub fn find_text(buffer: &Buffer, pattern: &str) -> Result<Vec<TextPosition>> {
    if pattern.is_empty() {
        return Err(EditError::EmptyPattern);
    }

    let pattern_len = char_len(pattern);
    let mut positions = Vec::new();

    for (line_idx, line) in buffer.lines().enumerate() {
        // Track the char column incrementally instead of recounting from 0
        let mut byte_cursor = 0;
        let mut col_cursor = 0;
        for (byte_idx, _) in line.match_indices(pattern) {
            col_cursor += char_len(&line[byte_cursor..byte_idx]);
            byte_cursor = byte_idx;
            positions.push(TextPosition::new(line_idx, col_cursor, pattern_len));
        }
    }

    tracing::debug!(pattern_len, matches = positions.len(), "find_text");
    Ok(positions)
}

/// Replace every occurrence of `target` with `replacement` on every line.
///
/// Returns the number of lines that changed, not the number of occurrences.
/// `replacement` must not contain the line separator.
pub fn replace_all(buffer: &mut Buffer, target: &str, replacement: &str) -> Result<usize> {
    if target.is_empty() {
        return Err(EditError::EmptyPattern);
    }
    check_single_line(replacement)?;

    let mut lines_modified = 0;
    for index in 0..buffer.line_count() {
        let updated = match buffer.line(index) {
            Some(line) if line.contains(target) => line.replace(target, replacement),
            _ => continue,
        };
        buffer.update_line(index, updated)?;
        lines_modified += 1;
    }

    tracing::debug!(lines_modified, "replace_all");
    Ok(lines_modified)
}
