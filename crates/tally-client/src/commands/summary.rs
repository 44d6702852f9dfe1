use crate::contracts::types::{ExpenseBook, ExpenseSummary, GroupTotal};

/// Aggregates the book, or returns `None` when there is nothing to summarize.
pub fn run(book: &ExpenseBook) -> Option<ExpenseSummary> {
    if book.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut by_category = Vec::new();
    let mut by_date = Vec::new();
    for expense in book {
        total += expense.amount;
        accumulate(&mut by_category, &expense.category, expense.amount);
        accumulate(&mut by_date, &expense.date, expense.amount);
    }

    Some(ExpenseSummary {
        total,
        by_category,
        by_date,
    })
}

// Groups keep first-seen order.
fn accumulate(groups: &mut Vec<GroupTotal>, label: &str, amount: f64) {
    match groups.iter_mut().find(|group| group.label == label) {
        Some(group) => group.total += amount,
        None => groups.push(GroupTotal {
            label: label.to_string(),
            total: amount,
        }),
    }
}
