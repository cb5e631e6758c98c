//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use blockedit::Buffer;

/// Build a buffer from a list of lines
pub fn buffer_of(lines: &[&str]) -> Buffer {
    Buffer::from_text(&lines.join("\n"))
}

/// Collect a buffer's lines as owned strings
pub fn lines_of(buffer: &Buffer) -> Vec<String> {
    buffer.lines().map(String::from).collect()
}

/// A small multi-line document used by several test files
pub fn sample_buffer() -> Buffer {
    buffer_of(&[
        "fn main() {",
        "    let x = 1;",
        "",
        "    println!(\"{}\", x);",
        "}",
    ])
}

/// Every (line, column) position in the buffer, including end-of-line columns
pub fn all_positions(buffer: &Buffer) -> Vec<(usize, usize)> {
    (0..buffer.line_count())
        .flat_map(|line| {
            let len = buffer.line_len(line).unwrap_or(0);
            (0..=len).map(move |col| (line, col))
        })
        .collect()
}
