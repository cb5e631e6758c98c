//! Command-line argument parsing and command execution
//!
//! Supports:
//! - Printing a file as the buffer sees it
//! - Find and replace-all
//! - Text and block insertion, character and block deletion
//! - Line-block and column-block moves
//!
//! The edited buffer is written to stdout; the input file is never modified.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::buffer::{Buffer, LINE_SEPARATOR};
use crate::messages::{EditMsg, EditOutcome};
use crate::update::update;

/// Apply a structural edit to a text file and print the result
#[derive(Parser, Debug)]
#[command(name = "blockedit", version, about = "Block-oriented text edits from the command line")]
pub struct CliArgs {
    /// File to edit, or `-` to read stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Config file to use instead of ~/.config/blockedit/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prefix each printed line with its 0-based index
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    #[command(subcommand)]
    pub command: EditCommand,
}

/// Edit to apply. All lines and columns are 0-based.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Print the buffer unchanged
    Show,

    /// List every non-overlapping match as LINE:COLUMN:LENGTH
    Find { pattern: String },

    /// Replace every occurrence; reports the number of lines changed on stderr
    Replace { target: String, replacement: String },

    /// Insert TEXT at LINE, COL (newlines in TEXT insert a block)
    Insert { line: usize, col: usize, text: String },

    /// Delete up to LENGTH characters from LINE starting at COL
    DeleteChars {
        line: usize,
        col: usize,
        length: usize,
    },

    /// Delete from START_LINE:START_COL to END_LINE:END_COL
    Delete {
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    },

    /// Move lines START..=END before line TARGET
    MoveLines {
        start: usize,
        end: usize,
        target: usize,
    },

    /// Move the column range START_COL..END_COL of lines START_LINE..=END_LINE
    /// to TARGET_LINE, TARGET_COL
    MoveColumns {
        start_line: usize,
        end_line: usize,
        start_col: usize,
        end_col: usize,
        target_line: usize,
        target_col: usize,
    },
}

impl EditCommand {
    /// The edit message for this command, `None` for `show`
    pub fn into_msg(self) -> Option<EditMsg> {
        let msg = match self {
            Self::Show => return None,
            Self::Find { pattern } => EditMsg::Find { pattern },
            Self::Replace {
                target,
                replacement,
            } => EditMsg::Replace {
                target,
                replacement,
            },
            Self::Insert { line, col, text } => EditMsg::InsertTextBlock {
                line,
                column: col,
                block: text.split(LINE_SEPARATOR).map(String::from).collect(),
            },
            Self::DeleteChars { line, col, length } => EditMsg::DeleteChars {
                line,
                start_col: col,
                length,
            },
            Self::Delete {
                start_line,
                start_col,
                end_line,
                end_col,
            } => EditMsg::DeleteTextBlock {
                start_line,
                start_col,
                end_line,
                end_col,
            },
            Self::MoveLines { start, end, target } => {
                EditMsg::MoveLineBlock { start, end, target }
            }
            Self::MoveColumns {
                start_line,
                end_line,
                start_col,
                end_col,
                target_line,
                target_col,
            } => EditMsg::MoveColumnBlock {
                start_line,
                end_line,
                start_col,
                end_col,
                target_line,
                target_col,
            },
        };
        Some(msg)
    }
}

/// Apply `command` to `buffer`, writing results to `out` and notes to `err`
pub fn run(
    buffer: &mut Buffer,
    command: EditCommand,
    line_numbers: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(msg) = command.into_msg() else {
        return write_buffer(buffer, line_numbers, out);
    };
    let name = msg.name();

    match update(buffer, msg).with_context(|| format!("{} failed", name))? {
        EditOutcome::Matches(positions) => {
            for pos in positions {
                writeln!(out, "{}:{}:{}", pos.line(), pos.column(), pos.length())?;
            }
            Ok(())
        }
        EditOutcome::Replaced { lines_modified } => {
            writeln!(err, "{} line(s) modified", lines_modified)?;
            write_buffer(buffer, line_numbers, out)
        }
        EditOutcome::Edited => write_buffer(buffer, line_numbers, out),
    }
}

/// Write every line of `buffer` followed by a newline
pub fn write_buffer(buffer: &Buffer, line_numbers: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if line_numbers {
        let width = buffer.line_count().saturating_sub(1).to_string().len();
        for (index, line) in buffer.lines().enumerate() {
            writeln!(out, "{:>width$}  {}", index, line, width = width)?;
        }
    } else {
        writeln!(out, "{}", buffer.content_as_string())?;
    }
    out.flush()?;
    Ok(())
}
