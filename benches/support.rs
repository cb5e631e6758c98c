//! Shared helpers for benchmarks

use blockedit::Buffer;

/// Create a buffer with the specified number of identical prose lines
#[allow(dead_code)]
pub fn make_buffer(lines: usize) -> Buffer {
    let text = vec!["The quick brown fox jumps over the lazy dog."; lines].join("\n");
    Buffer::from_text(&text)
}

/// Create a buffer of code-like lines with varying lengths
#[allow(dead_code)]
pub fn make_code_buffer(repeats: usize) -> Buffer {
    let chunk = [
        "fn main() {",
        "    let x = 42;",
        "    let y = x + 1;",
        "    println!(\"Result: {}\", y);",
        "}",
        "",
    ];
    let lines: Vec<&str> = chunk.iter().copied().cycle().take(chunk.len() * repeats).collect();
    Buffer::from_text(&lines.join("\n"))
}
