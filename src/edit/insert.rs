//! String and multi-line block insertion

use crate::buffer::{check_single_line, Buffer, LINE_SEPARATOR};
use crate::error::Result;

/// Splice `text` into line `line` at character column `col`.
///
/// `col` may equal the line length (append at end of line). `text` must not
/// contain the line separator; use [`insert_text`] for multi-line input.
pub fn insert_string(buffer: &mut Buffer, line: usize, col: usize, text: &str) -> Result<()> {
    check_single_line(text)?;
    let (prefix, suffix) = buffer.split_line_at(line, col)?;
    let updated = [prefix, text, suffix].concat();
    buffer.update_line(line, updated)?;

    tracing::trace!(line, col, len = text.len(), "insert_string");
    Ok(())
}

/// Insert a block of lines at (`line`, `col`).
///
/// The first block line joins the text before `col`, the last block line
/// takes over the text after it, and the lines in between become new lines.
/// A block of N lines grows the buffer by N - 1 lines.
pub fn insert_text_block<S: AsRef<str>>(
    buffer: &mut Buffer,
    line: usize,
    col: usize,
    block: &[S],
) -> Result<()> {
    let (first, middle, last) = match block {
        [] => return Ok(()),
        [single] => return insert_string(buffer, line, col, single.as_ref()),
        [first, middle @ .., last] => (first.as_ref(), middle, last.as_ref()),
    };
    for text in block {
        check_single_line(text.as_ref())?;
    }

    let (head, tail) = {
        let (prefix, suffix) = buffer.split_line_at(line, col)?;
        (prefix.to_string() + first, last.to_string() + suffix)
    };

    buffer.update_line(line, head)?;
    for (offset, text) in middle.iter().enumerate() {
        buffer.insert_line(line + 1 + offset, text.as_ref())?;
    }
    buffer.insert_line(line + block.len() - 1, tail)?;

    tracing::debug!(
        line,
        col,
        block_lines = block.len(),
        line_count = buffer.line_count(),
        "insert_text_block"
    );
    Ok(())
}

/// Insert separator-joined `text` at (`line`, `col`), splitting it into a block
pub fn insert_text(buffer: &mut Buffer, line: usize, col: usize, text: &str) -> Result<()> {
    let block: Vec<&str> = text.split(LINE_SEPARATOR).collect();
    insert_text_block(buffer, line, col, &block)
}
