use std::num::IntErrorKind;

use log::info;

use crate::commands::common::strip_digit_separators;
use crate::contracts::types::{DeleteOutcome, ExpenseBook};
use crate::store::Store;
use crate::{ClientError, ClientResult};

/// Parses a delete answer. Integers too large for `i64` saturate so they
/// still land outside the valid range and cancel.
pub fn parse_choice(input: &str) -> ClientResult<i64> {
    let trimmed = input.trim();
    let Some(digits) = strip_digit_separators(trimmed) else {
        return Err(ClientError::invalid_choice(trimmed));
    };
    match digits.parse::<i64>() {
        Ok(choice) => Ok(choice),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ClientError::invalid_choice(trimmed)),
        },
    }
}

/// Removes the expense at `choice` (1-based). Any other value cancels
/// without touching the book or the data file.
pub fn run(book: &mut ExpenseBook, store: &Store, choice: i64) -> ClientResult<DeleteOutcome> {
    let Some(removed) = book.remove_position(choice) else {
        return Ok(DeleteOutcome::Cancelled);
    };

    store.save(book)?;
    info!(
        "deleted expense #{choice}: {} {} on {}",
        removed.category, removed.amount, removed.date
    );
    Ok(DeleteOutcome::Deleted(removed))
}
