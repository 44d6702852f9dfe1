pub mod commands;
pub mod contracts;
pub mod error;
pub mod state;
pub mod store;

pub use contracts::types::{DeleteOutcome, Expense, ExpenseBook, ExpenseSummary, GroupTotal};
pub use error::{ClientError, ClientResult};
pub use store::Store;
