//! Loading external text into a [`Buffer`]
//!
//! Input is read line by line, accepting `\n`, `\r\n` or a lone `\r` as the
//! terminator, and the
//! lines are re-joined with a single separator before being handed to
//! [`Buffer::set_content_from_str`]. A trailing newline in the input therefore
//! does not become a trailing empty line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::{Buffer, LINE_SEPARATOR};

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Bytes scanned for NUL when deciding whether input is binary
const BINARY_SNIFF_LEN: usize = 8192;

/// Errors that can occur when loading a file into a buffer
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("cannot open directory: {}", .0.display())]
    IsDirectory(PathBuf),

    #[error("cannot open binary file: {}", .0.display())]
    BinaryFile(PathBuf),

    #[error(
        "{} is too large ({:.1} MB, max {} MB)",
        .path.display(),
        .size_mb,
        MAX_FILE_SIZE / (1024 * 1024)
    )]
    TooLarge { path: PathBuf, size_mb: f64 },

    #[error("{} is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("error reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that `path` names a readable regular file within the size limit
pub fn validate_file(path: &Path) -> Result<(), LoadError> {
    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.is_dir() {
        return Err(LoadError::IsDirectory(path.to_path_buf()));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Whether `bytes` look binary (a NUL byte within the first 8KB)
pub fn is_likely_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(BINARY_SNIFF_LEN)].contains(&0)
}

/// Split `text` into lines ended by `\n`, `\r\n` or `\r`
///
/// A final terminator does not start another line.
pub fn split_terminated_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(|c: char| c == '\n' || c == '\r') else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);
        let terminator_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator_len..];
    }
    lines
}

/// Re-join `text` line by line with a single separator and no trailing separator
pub fn normalize_lines(text: &str) -> String {
    split_terminated_lines(text).join(LINE_SEPARATOR)
}

/// Load a file into a fresh buffer
pub fn load_buffer(path: &Path) -> Result<Buffer, LoadError> {
    validate_file(path)?;
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let buffer = buffer_from_bytes(path, bytes)?;

    tracing::info!(
        path = %path.display(),
        lines = buffer.line_count(),
        "loaded buffer"
    );
    Ok(buffer)
}

/// Load everything readable from `reader` into a fresh buffer
///
/// `label` names the source in error messages (e.g. `-` for stdin).
pub fn load_buffer_from_reader<R: Read>(mut reader: R, label: &Path) -> Result<Buffer, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(label, e))?;
    buffer_from_bytes(label, bytes)
}

fn buffer_from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Buffer, LoadError> {
    if is_likely_binary(&bytes) {
        return Err(LoadError::BinaryFile(path.to_path_buf()));
    }
    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8(path.to_path_buf()))?;
    Ok(Buffer::from_text(&normalize_lines(&text)))
}

fn io_error(path: &Path, e: io::Error) -> LoadError {
    match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
