//! Blockedit - line-addressed text buffer with structural editing
//!
//! This crate provides a [`Buffer`] of lines and the operations a line-oriented
//! editor performs on it: string and block insertion, character and block
//! deletion, line-block and rectangular column-block moves, and
//! find/replace-all. A presentation layer drives it through
//! [`update`](update::update) with [`EditMsg`] values, in the style of the
//! Elm Architecture.

pub mod buffer;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod edit;
pub mod error;
pub mod logging;
pub mod messages;
pub mod storage;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use buffer::Buffer;
pub use config::Config;
pub use edit::TextPosition;
pub use error::{EditError, ErrorKind};
pub use messages::{EditMsg, EditOutcome};
