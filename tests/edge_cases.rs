//! Edge cases - extreme coordinates, empty buffers, and long operation sequences
//!
//! These tests push the editing operations with unusual inputs and check that
//! the buffer always keeps at least one line and never panics.

mod common;

use blockedit::edit::{
    delete_chars, delete_text_block, find_text, insert_text, move_column_block, move_line_block,
    replace_all,
};
use blockedit::{Buffer, EditError, ErrorKind};
use common::{buffer_of, lines_of};

// ========================================================================
// Empty buffer
// ========================================================================

#[test]
fn test_empty_buffer_operations() {
    let mut buffer = Buffer::new();
    delete_chars(&mut buffer, 0, 0, 10).unwrap();
    delete_text_block(&mut buffer, 0, 0, 0, 0).unwrap();
    move_line_block(&mut buffer, 0, 0, 0).unwrap();
    move_line_block(&mut buffer, 0, 0, 1).unwrap();
    assert_eq!(replace_all(&mut buffer, "a", "b").unwrap(), 0);
    assert!(find_text(&buffer, "a").unwrap().is_empty());
    assert_eq!(buffer, Buffer::new());
}

#[test]
fn test_delete_every_line_keeps_one() {
    let mut buffer = buffer_of(&["a", "b", "c"]);
    for _ in 0..3 {
        buffer.delete_line(0).unwrap();
    }
    assert_eq!(lines_of(&buffer), vec![""]);
    assert!(buffer.delete_line(0).is_ok());
    assert_eq!(buffer.line_count(), 1);
}

// ========================================================================
// Extreme coordinates
// ========================================================================

#[test]
fn test_huge_indices_are_errors_not_panics() {
    let mut buffer = buffer_of(&["abc"]);
    let err = insert_text(&mut buffer, usize::MAX, 0, "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = move_line_block(&mut buffer, 0, usize::MAX, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    delete_chars(&mut buffer, 0, usize::MAX, usize::MAX).unwrap();
    assert_eq!(lines_of(&buffer), vec!["abc"]);

    let mut buffer = buffer_of(&["ab", "cd"]);
    let err = move_column_block(&mut buffer, 0, 1, 0, 1, usize::MAX, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(lines_of(&buffer), vec!["ab", "cd"]);
}

#[test]
fn test_column_block_far_right_target_pads() {
    let mut buffer = buffer_of(&["xy"]);
    move_column_block(&mut buffer, 0, 0, 0, 1, 0, 10).unwrap();
    assert_eq!(lines_of(&buffer), vec!["y         x"]);
    assert_eq!(buffer.line_len(0), Some(11));
}

#[test]
fn test_column_block_onto_overlapping_region() {
    let mut buffer = buffer_of(&["abcd", "efgh"]);
    move_column_block(&mut buffer, 0, 1, 0, 2, 0, 1).unwrap();
    assert_eq!(lines_of(&buffer), vec!["cabd", "gefh"]);
}

#[test]
fn test_column_block_with_multibyte_chars() {
    let mut buffer = buffer_of(&["αβγδ", "ab"]);
    move_column_block(&mut buffer, 0, 1, 1, 3, 0, 0).unwrap();
    assert_eq!(lines_of(&buffer), vec!["βγαδ", "ba"]);
}

// ========================================================================
// Line block target inside the block
// ========================================================================

#[test]
fn test_every_inside_target_rejected() {
    let original = buffer_of(&["0", "1", "2", "3", "4"]);
    for target in 2..=4 {
        let mut buffer = original.clone();
        let err = move_line_block(&mut buffer, 1, 4, target).unwrap_err();
        assert!(matches!(err, EditError::TargetInsideBlock { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(buffer, original);
    }
}

// ========================================================================
// Operation sequences
// ========================================================================

#[test]
fn test_many_inserts_and_deletes() {
    let mut buffer = Buffer::new();
    for i in 0..50 {
        let line = buffer.line_count() - 1;
        let col = buffer.line_len(line).unwrap();
        insert_text(&mut buffer, line, col, &format!("line {}\n", i)).unwrap();
    }
    assert_eq!(buffer.line_count(), 51);
    assert_eq!(buffer.line(49), Some("line 49"));

    delete_text_block(&mut buffer, 0, 0, 50, 0).unwrap();
    assert_eq!(buffer, Buffer::new());
}

#[test]
fn test_rotate_lines_repeatedly() {
    let mut buffer = buffer_of(&["a", "b", "c", "d"]);
    for _ in 0..4 {
        move_line_block(&mut buffer, 0, 0, 4).unwrap();
    }
    assert_eq!(lines_of(&buffer), vec!["a", "b", "c", "d"]);
}
