use chrono::NaiveDate;
use log::info;

use crate::commands::common::{capitalize_category, format_date, strip_digit_separators};
use crate::contracts::types::{Expense, ExpenseBook};
use crate::store::Store;
use crate::{ClientError, ClientResult};

/// Raw answers collected for a new expense, after the amount has been parsed.
#[derive(Debug, Clone, Copy)]
pub struct NewExpense<'a> {
    pub amount: f64,
    pub category: &'a str,
    pub date: &'a str,
}

/// Parses an amount answer. Sign is not checked; non-finite values are
/// rejected since JSON has no representation for them.
pub fn parse_amount(input: &str) -> ClientResult<f64> {
    let trimmed = input.trim();
    let Some(digits) = strip_digit_separators(trimmed) else {
        return Err(ClientError::invalid_amount(trimmed));
    };
    match digits.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ClientError::invalid_amount(trimmed)),
    }
}

/// Empty input means today; anything else is kept verbatim.
pub fn resolve_date(input: &str, today: NaiveDate) -> String {
    if input.is_empty() {
        return format_date(today);
    }
    input.to_string()
}

pub fn run(
    book: &mut ExpenseBook,
    store: &Store,
    new_expense: NewExpense<'_>,
    today: NaiveDate,
) -> ClientResult<Expense> {
    let expense = Expense {
        amount: new_expense.amount,
        category: capitalize_category(new_expense.category),
        date: resolve_date(new_expense.date, today),
    };

    book.push(expense.clone());
    store.save(book)?;
    info!(
        "added expense {} {} on {}",
        expense.category, expense.amount, expense.date
    );
    Ok(expense)
}
