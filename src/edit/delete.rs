//! Character-range and multi-line block deletion

use crate::buffer::Buffer;
use crate::error::{EditError, Result};
use crate::util::text::{char_len, remove_cols, slice_cols};

/// Remove up to `length` characters from line `line` starting at `start_col`.
///
/// A start column at or past the end of the line removes nothing; a span that
/// runs past the end of the line is clamped to it.
pub fn delete_chars(buffer: &mut Buffer, line: usize, start_col: usize, length: usize) -> Result<()> {
    let text = buffer.checked_line(line)?;
    let line_len = char_len(text);
    if start_col >= line_len {
        tracing::trace!(line, start_col, line_len, "delete_chars past end, nothing removed");
        return Ok(());
    }

    let end_col = start_col.saturating_add(length).min(line_len);
    let updated = remove_cols(text, start_col, end_col);
    buffer.update_line(line, updated)
}

/// Delete the text between (`start_line`, `start_col`) and (`end_line`, `end_col`).
///
/// Across lines, the text before the start and the text after the end are
/// merged into `start_line` and the lines in between are removed.
pub fn delete_text_block(
    buffer: &mut Buffer,
    start_line: usize,
    start_col: usize,
    end_line: usize,
    end_col: usize,
) -> Result<()> {
    if end_line < start_line {
        return Err(EditError::InvertedRange {
            what: "line",
            start: start_line,
            end: end_line,
        });
    }

    if start_line == end_line {
        buffer.checked_line(start_line)?;
        if end_col < start_col {
            return Err(EditError::InvertedRange {
                what: "column",
                start: start_col,
                end: end_col,
            });
        }
        return delete_chars(buffer, start_line, start_col, end_col - start_col);
    }

    let merged = {
        let (prefix, _) = buffer.split_line_at(start_line, start_col)?;
        let (_, suffix) = buffer.split_line_at(end_line, end_col)?;
        [prefix, suffix].concat()
    };

    buffer.update_line(start_line, merged)?;
    buffer.remove_lines(start_line + 1..=end_line)?;

    tracing::debug!(
        start_line,
        end_line,
        removed_lines = end_line - start_line,
        line_count = buffer.line_count(),
        "delete_text_block"
    );
    Ok(())
}

/// Copy the text between two positions without modifying the buffer.
///
/// Returns one entry per line touched, in the shape `insert_text_block`
/// accepts, so deleting and re-inserting the result restores the buffer.
pub fn extract_text_block(
    buffer: &Buffer,
    start_line: usize,
    start_col: usize,
    end_line: usize,
    end_col: usize,
) -> Result<Vec<String>> {
    if end_line < start_line {
        return Err(EditError::InvertedRange {
            what: "line",
            start: start_line,
            end: end_line,
        });
    }

    if start_line == end_line {
        let text = buffer.checked_line(start_line)?;
        if end_col < start_col {
            return Err(EditError::InvertedRange {
                what: "column",
                start: start_col,
                end: end_col,
            });
        }
        return Ok(vec![slice_cols(text, start_col, end_col).to_string()]);
    }

    let (_, head) = buffer.split_line_at(start_line, start_col)?;
    let (tail, _) = buffer.split_line_at(end_line, end_col)?;

    let mut block = Vec::with_capacity(end_line - start_line + 1);
    block.push(head.to_string());
    block.extend(
        (start_line + 1..end_line).map(|index| buffer.line_or_empty(index).to_string()),
    );
    block.push(tail.to_string());
    Ok(block)
}
