use serde::{Deserialize, Serialize};

/// One recorded expense. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// All expenses in insertion order. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes the expense at a 1-based position, or returns `None` when the
    /// position is outside `1..=len`.
    pub fn remove_position(&mut self, position: i64) -> Option<Expense> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        if index >= self.expenses.len() {
            return None;
        }
        Some(self.expenses.remove(index))
    }
}

impl From<Vec<Expense>> for ExpenseBook {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a ExpenseBook {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    pub by_category: Vec<GroupTotal>,
    pub by_date: Vec<GroupTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Expense),
    Cancelled,
}
