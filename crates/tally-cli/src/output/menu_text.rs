pub const MENU: &str = "
--- Personal Expense Tracker ---
1. Add Expense
2. View Summary
3. Delete Expense
4. Exit";

pub const MENU_PROMPT: &str = "Enter choice: ";
pub const AMOUNT_PROMPT: &str = "Enter amount: ";
pub const CATEGORY_PROMPT: &str = "Enter category (Food, Transport, Entertainment, etc.): ";
pub const DATE_PROMPT: &str = "Enter date (YYYY-MM-DD) or press Enter for today: ";
pub const DELETE_PROMPT: &str = "Enter expense number to delete (0 to cancel): ";

pub const ADDED: &str = "✅ Expense added successfully!";
pub const NO_EXPENSES: &str = "No expenses recorded yet.";
pub const NOTHING_TO_DELETE: &str = "No expenses to delete.";
pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub const GOODBYE: &str = "Goodbye!";
