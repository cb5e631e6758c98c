//! Character-column helpers for line text
//!
//! Columns are counted in `char`s. Every helper converts to byte offsets
//! internally so a slice never lands inside a multi-byte character.

/// Length of `text` in characters
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a character column to a byte offset, clamped to the end of `text`
pub fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split `text` at a character column (clamped to the line end)
pub fn split_at_col(text: &str, column: usize) -> (&str, &str) {
    text.split_at(byte_offset(text, column))
}

/// Slice `text` by the character range `start..end`, clamped to the line
pub fn slice_cols(text: &str, start: usize, end: usize) -> &str {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    &text[start_byte..end_byte]
}

/// Copy of `text` with the character range `start..end` removed
pub fn remove_cols(text: &str, start: usize, end: usize) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    let mut result = String::with_capacity(text.len() - (end_byte - start_byte));
    result.push_str(&text[..start_byte]);
    result.push_str(&text[end_byte..]);
    result
}

/// Right-pad `text` with spaces until it is at least `width` characters long
///
/// Fixed-width fill: tabs already in the line count as one column.
pub fn pad_to_width(text: &mut String, width: usize) {
    let len = char_len(text);
    if len < width {
        text.extend(std::iter::repeat(' ').take(width - len));
    }
}
