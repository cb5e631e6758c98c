//! Structural editing operations on a [`Buffer`](crate::buffer::Buffer).
//!
//! Every operation takes the buffer explicitly as `&Buffer` or `&mut Buffer`
//! and addresses text with 0-based line indices and character columns.
//! Arguments are validated before the buffer is touched, so a rejected call
//! leaves the buffer as it was.
//!
//! - [`insert`]: string splicing and multi-line block insertion
//! - [`delete`]: character ranges and multi-line blocks
//! - [`block_move`]: whole-line blocks and rectangular column blocks
//! - [`find_replace`]: non-overlapping search and whole-line replace-all

pub mod block_move;
pub mod delete;
pub mod find_replace;
pub mod insert;

pub use block_move::{extract_column_block, move_column_block, move_line_block};
pub use delete::{delete_chars, delete_text_block, extract_text_block};
pub use find_replace::{find_text, replace_all, TextPosition};
pub use insert::{insert_string, insert_text, insert_text_block};
