use tally_client::{DeleteOutcome, ExpenseBook};

use crate::output::format::currency_plain;

pub fn render_delete_listing(book: &ExpenseBook) -> Vec<String> {
    let mut lines = vec![String::new(), "--- Delete Expense ---".to_string()];
    for (index, expense) in book.iter().enumerate() {
        lines.push(format!(
            "{}. {} | {} | {}",
            index + 1,
            expense.date,
            expense.category,
            currency_plain(expense.amount)
        ));
    }
    lines
}

pub fn render_delete_outcome(outcome: &DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted(expense) => format!(
            "✅ Deleted: {} - {} on {}",
            expense.category,
            currency_plain(expense.amount),
            expense.date
        ),
        DeleteOutcome::Cancelled => "Cancelled.".to_string(),
    }
}
