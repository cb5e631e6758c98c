//! Line-block and rectangular column-block relocation
//!
//! A line block is a contiguous range of whole lines. A column block is the
//! rectangle `start_col..end_col` across a range of lines; lines too short to
//! reach `start_col` (or missing altogether) contribute an empty segment.

use crate::buffer::Buffer;
use crate::error::{EditError, Result};
use crate::util::text::{char_len, pad_to_width, remove_cols, slice_cols, split_at_col};

/// Move lines `start..=end` so that they sit before the line that was at
/// index `target` before the move.
///
/// `target == line_count()` moves the block to the end of the buffer.
/// Targets of `start` or `end + 1` leave the buffer unchanged; a target inside
/// `start + 1..=end` is rejected.
pub fn move_line_block(buffer: &mut Buffer, start: usize, end: usize, target: usize) -> Result<()> {
    let line_count = buffer.line_count();
    if end < start {
        return Err(EditError::InvertedRange {
            what: "line",
            start,
            end,
        });
    }
    if end >= line_count {
        return Err(EditError::LineOutOfRange {
            line: end,
            line_count,
        });
    }
    if target > line_count {
        return Err(EditError::LineOutOfRange {
            line: target,
            line_count,
        });
    }
    if target > start && target <= end {
        return Err(EditError::TargetInsideBlock { start, end, target });
    }
    if target == start || target == end + 1 {
        tracing::trace!(start, end, target, "move_line_block onto itself");
        return Ok(());
    }

    let block = buffer.remove_lines(start..=end)?;
    // Targets after the block were counted before the block was removed
    let insert_at = if target > start {
        target - block.len()
    } else {
        target
    };
    buffer.insert_lines(insert_at, block)?;

    tracing::debug!(start, end, target, insert_at, "move_line_block");
    Ok(())
}

/// Copy the rectangle `start_col..end_col` of lines `start_line..=end_line`.
///
/// Produces exactly one segment per line; short and missing lines yield `""`.
pub fn extract_column_block(
    buffer: &Buffer,
    start_line: usize,
    end_line: usize,
    start_col: usize,
    end_col: usize,
) -> Vec<String> {
    (start_line..=end_line)
        .map(|index| slice_cols(buffer.line_or_empty(index), start_col, end_col).to_string())
        .collect()
}

/// Move the rectangle `start_col..end_col` of lines `start_line..=end_line`
/// so that its top-left corner lands on (`target_line`, `target_col`).
///
/// The rectangle is cut from every source line long enough to reach
/// `start_col`. At the destination, missing lines are appended and lines
/// shorter than `target_col` are padded with spaces before each segment is
/// spliced in.
pub fn move_column_block(
    buffer: &mut Buffer,
    start_line: usize,
    end_line: usize,
    start_col: usize,
    end_col: usize,
    target_line: usize,
    target_col: usize,
) -> Result<()> {
    if end_line < start_line {
        return Err(EditError::InvertedRange {
            what: "line",
            start: start_line,
            end: end_line,
        });
    }
    if end_col < start_col {
        return Err(EditError::InvertedRange {
            what: "column",
            start: start_col,
            end: end_col,
        });
    }

    if target_line.checked_add(end_line - start_line).is_none() {
        return Err(EditError::LineOutOfRange {
            line: target_line,
            line_count: buffer.line_count(),
        });
    }

    let segments = extract_column_block(buffer, start_line, end_line, start_col, end_col);

    for index in start_line..=end_line.min(buffer.line_count().saturating_sub(1)) {
        let text = buffer.line_or_empty(index);
        if start_col < char_len(text) {
            let collapsed = remove_cols(text, start_col, end_col);
            buffer.update_line(index, collapsed)?;
        }
    }

    for (offset, segment) in segments.iter().enumerate() {
        let index = target_line + offset;
        buffer.grow_to(index);

        let mut text = buffer.line_or_empty(index).to_string();
        pad_to_width(&mut text, target_col);
        let (before, after) = split_at_col(&text, target_col);
        let updated = [before, segment.as_str(), after].concat();
        buffer.update_line(index, updated)?;
    }

    tracing::debug!(
        start_line,
        end_line,
        start_col,
        end_col,
        target_line,
        target_col,
        line_count = buffer.line_count(),
        "move_column_block"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(buffer: &Buffer) -> Vec<&str> {
        buffer.lines().collect()
    }

    // ========================================================================
    // move_line_block tests
    // ========================================================================

    #[test]
    fn test_move_line_block_down() {
        let mut buffer = Buffer::from_text("a\nb\nc\nd\ne");
        move_line_block(&mut buffer, 0, 1, 4).unwrap();
        assert_eq!(lines_of(&buffer), vec!["c", "d", "a", "b", "e"]);
    }

    #[test]
    fn test_move_line_block_up() {
        let mut buffer = Buffer::from_text("a\nb\nc\nd\ne");
        move_line_block(&mut buffer, 3, 4, 1).unwrap();
        assert_eq!(lines_of(&buffer), vec!["a", "d", "e", "b", "c"]);
    }

    #[test]
    fn test_move_line_block_to_end() {
        let mut buffer = Buffer::from_text("a\nb\nc");
        move_line_block(&mut buffer, 0, 0, 3).unwrap();
        assert_eq!(lines_of(&buffer), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_line_block_to_start() {
        let mut buffer = Buffer::from_text("a\nb\nc");
        move_line_block(&mut buffer, 2, 2, 0).unwrap();
        assert_eq!(lines_of(&buffer), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_line_block_onto_itself_is_noop() {
        let mut buffer = Buffer::from_text("a\nb\nc");
        move_line_block(&mut buffer, 0, 2, 0).unwrap();
        move_line_block(&mut buffer, 0, 2, 3).unwrap();
        move_line_block(&mut buffer, 1, 1, 2).unwrap();
        assert_eq!(lines_of(&buffer), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_line_block_target_inside_rejected() {
        let mut buffer = Buffer::from_text("a\nb\nc\nd");
        let err = move_line_block(&mut buffer, 0, 2, 2).unwrap_err();
        assert_eq!(
            err,
            EditError::TargetInsideBlock {
                start: 0,
                end: 2,
                target: 2
            }
        );
        assert_eq!(lines_of(&buffer), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_move_line_block_range_errors() {
        let mut buffer = Buffer::from_text("a\nb");
        assert!(matches!(
            move_line_block(&mut buffer, 0, 2, 0),
            Err(EditError::LineOutOfRange { line: 2, .. })
        ));
        assert!(matches!(
            move_line_block(&mut buffer, 0, 0, 3),
            Err(EditError::LineOutOfRange { line: 3, .. })
        ));
        assert!(matches!(
            move_line_block(&mut buffer, 1, 0, 0),
            Err(EditError::InvertedRange { .. })
        ));
    }

    // ========================================================================
    // move_column_block tests
    // ========================================================================

    #[test]
    fn test_extract_column_block_tolerates_short_lines() {
        let buffer = Buffer::from_text("abcdef\nab\nabcd");
        let block = extract_column_block(&buffer, 0, 3, 1, 3);
        assert_eq!(block, vec!["bc", "b", "bc", ""]);
    }

    #[test]
    fn test_move_column_block_appends_at_line_end() {
        let mut buffer = Buffer::from_text("abcdef\nghijkl");
        move_column_block(&mut buffer, 0, 1, 1, 3, 0, 4).unwrap();
        assert_eq!(lines_of(&buffer), vec!["adefbc", "gjklhi"]);
    }

    #[test]
    fn test_move_column_block_pads_short_target_lines() {
        let mut buffer = Buffer::from_text("XYab\nZW");
        move_column_block(&mut buffer, 0, 0, 0, 2, 1, 5).unwrap();
        assert_eq!(lines_of(&buffer), vec!["ab", "ZW   XY"]);
    }

    #[test]
    fn test_move_column_block_grows_buffer() {
        let mut buffer = Buffer::from_text("12\n34");
        move_column_block(&mut buffer, 0, 1, 0, 1, 2, 2).unwrap();
        assert_eq!(lines_of(&buffer), vec!["2", "4", "  1", "  3"]);
    }

    #[test]
    fn test_move_column_block_splices_into_middle() {
        let mut buffer = Buffer::from_text("ab\ncd\nwxyz\nwxyz");
        move_column_block(&mut buffer, 0, 1, 0, 2, 2, 2).unwrap();
        assert_eq!(lines_of(&buffer), vec!["", "", "wxabyz", "wxcdyz"]);
    }

    #[test]
    fn test_move_column_block_missing_source_lines_contribute_nothing() {
        let mut buffer = Buffer::from_text("abc");
        move_column_block(&mut buffer, 0, 2, 1, 2, 0, 0).unwrap();
        assert_eq!(lines_of(&buffer), vec!["bac", "", ""]);
    }

    #[test]
    fn test_move_column_block_start_past_every_line() {
        let mut buffer = Buffer::from_text("ab\ncd");
        move_column_block(&mut buffer, 0, 1, 5, 8, 0, 0).unwrap();
        assert_eq!(lines_of(&buffer), vec!["ab", "cd"]);
    }

    #[test]
    fn test_move_column_block_inverted_ranges() {
        let mut buffer = Buffer::from_text("abc");
        assert!(matches!(
            move_column_block(&mut buffer, 1, 0, 0, 1, 0, 0),
            Err(EditError::InvertedRange { what: "line", .. })
        ));
        assert!(matches!(
            move_column_block(&mut buffer, 0, 0, 2, 1, 0, 0),
            Err(EditError::InvertedRange { what: "column", .. })
        ));
        assert_eq!(lines_of(&buffer), vec!["abc"]);
    }
}
