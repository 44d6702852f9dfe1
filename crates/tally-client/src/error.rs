use std::path::Path;

use thiserror::Error;

const RECOVERABLE_CODES: [&str; 2] = ["invalid_amount", "invalid_choice"];

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
        }
    }

    /// Input errors abort the current operation only; every other code ends
    /// the session.
    pub fn is_recoverable(&self) -> bool {
        RECOVERABLE_CODES.contains(&self.code.as_str())
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new(
            "invalid_argument",
            message,
            vec!["Run `tally --help` for usage.".to_string()],
        )
    }

    pub fn invalid_amount(input: &str) -> Self {
        Self::new(
            "invalid_amount",
            &format!("Amount `{input}` is not a number."),
            vec![
                "Enter the amount as a plain decimal number, e.g. 12.50.".to_string(),
                "Choose 1 from the menu to try again.".to_string(),
            ],
        )
    }

    pub fn invalid_choice(input: &str) -> Self {
        Self::new(
            "invalid_choice",
            &format!("Expense number `{input}` is not a whole number."),
            vec![
                "Enter the number shown next to the expense, or 0 to cancel.".to_string(),
                "Choose 3 from the menu to try again.".to_string(),
            ],
        )
    }

    pub fn store_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_write_failed",
            &format!("Cannot write expenses to `{location}`: {detail}"),
            vec![format!(
                "Make sure the directory containing `{location}` exists and is writable."
            )],
        )
    }

    pub fn store_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_write_failed",
            &format!("Cannot write expenses to `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or pass `--file` with a writable path."
            )],
        )
    }

    pub fn store_path_unresolved(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_path_unresolved",
            &format!("Cannot resolve data file path `{location}`: {detail}"),
            vec!["Run tally from an existing working directory.".to_string()],
        )
    }

    pub fn input_closed() -> Self {
        Self::new(
            "input_closed",
            "Input ended before the session was finished.",
            vec!["Choose 4 from the menu to exit tally.".to_string()],
        )
    }

    pub fn terminal_io_failed(detail: &str) -> Self {
        Self::new(
            "terminal_io_failed",
            &format!("Terminal input/output failed: {detail}"),
            Vec::new(),
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ClientError;

    #[test]
    fn only_input_errors_are_recoverable() {
        assert!(ClientError::invalid_amount("abc").is_recoverable());
        assert!(ClientError::invalid_choice("two").is_recoverable());
        assert!(!ClientError::input_closed().is_recoverable());
        assert!(
            !ClientError::store_write_failed(Path::new("expenses.json"), "disk full")
                .is_recoverable()
        );
    }

    #[test]
    fn write_failures_share_one_code() {
        let path = Path::new("/tmp/expenses.json");
        let denied = ClientError::store_permission_denied(path, "denied");
        let failed = ClientError::store_write_failed(path, "no such directory");
        assert_eq!(denied.code, "store_write_failed");
        assert_eq!(failed.code, "store_write_failed");
        assert!(denied.message.contains("/tmp/expenses.json"));
        assert_eq!(denied.recovery_steps.len(), 1);
    }
}
