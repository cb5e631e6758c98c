//! Update function for the Elm-style architecture
//!
//! Every buffer change requested by a presentation layer flows through
//! [`update`], which dispatches to the editing operations in [`crate::edit`].

use crate::buffer::Buffer;
use crate::edit;
use crate::error::Result;
use crate::messages::{EditMsg, EditOutcome};

/// Apply `msg` to `buffer`
///
/// Errors propagate unchanged; a rejected message leaves the buffer untouched.
pub fn update(buffer: &mut Buffer, msg: EditMsg) -> Result<EditOutcome> {
    let name = msg.name();

    #[cfg(feature = "profile-tracing")]
    let _span = tracing::info_span!("update", msg = name).entered();

    let result = dispatch(buffer, msg);

    match &result {
        Ok(outcome) => tracing::debug!(
            msg = name,
            line_count = buffer.line_count(),
            ?outcome,
            "applied"
        ),
        Err(e) => tracing::warn!(msg = name, error = %e, "rejected"),
    }
    result
}

fn dispatch(buffer: &mut Buffer, msg: EditMsg) -> Result<EditOutcome> {
    match msg {
        EditMsg::InsertString { line, column, text } => {
            edit::insert_string(buffer, line, column, &text)?;
            Ok(EditOutcome::Edited)
        }

        EditMsg::InsertTextBlock {
            line,
            column,
            block,
        } => {
            edit::insert_text_block(buffer, line, column, block.as_slice())?;
            Ok(EditOutcome::Edited)
        }

        EditMsg::DeleteChars {
            line,
            start_col,
            length,
        } => {
            edit::delete_chars(buffer, line, start_col, length)?;
            Ok(EditOutcome::Edited)
        }

        EditMsg::DeleteTextBlock {
            start_line,
            start_col,
            end_line,
            end_col,
        } => {
            edit::delete_text_block(buffer, start_line, start_col, end_line, end_col)?;
            Ok(EditOutcome::Edited)
        }

        EditMsg::MoveLineBlock { start, end, target } => {
            edit::move_line_block(buffer, start, end, target)?;
            Ok(EditOutcome::Edited)
        }

        EditMsg::MoveColumnBlock {
            start_line,
            end_line,
            start_col,
            end_col,
            target_line,
            target_col,
        } => {
            edit::move_column_block(
                buffer,
                start_line,
                end_line,
                start_col,
                end_col,
                target_line,
                target_col,
            )?;
            Ok(EditOutcome::Edited)
        }

        EditMsg::Find { pattern } => edit::find_text(buffer, &pattern).map(EditOutcome::Matches),

        EditMsg::Replace {
            target,
            replacement,
        } => {
            let lines_modified = edit::replace_all(buffer, &target, &replacement)?;
            Ok(EditOutcome::Replaced { lines_modified })
        }

        EditMsg::SetContent(content) => {
            buffer.set_content_from_str(&content);
            Ok(EditOutcome::Edited)
        }
    }
}
