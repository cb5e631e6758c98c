//! Utility modules

pub mod text;

pub use text::{byte_offset, char_len, pad_to_width, remove_cols, slice_cols, split_at_col};
