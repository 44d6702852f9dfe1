mod delete_text;
mod error_text;
mod format;
pub mod menu_text;
mod summary_text;

use tally_client::ClientError;

use crate::stdout_io::write_stdout_line;

pub use delete_text::{render_delete_listing, render_delete_outcome};
pub use error_text::render_error;
pub use summary_text::render_summary;

pub fn print_failure(error: &ClientError) -> std::io::Result<()> {
    write_stdout_line(&render_error(error))
}
