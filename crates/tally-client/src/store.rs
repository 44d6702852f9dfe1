use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::contracts::types::ExpenseBook;
use crate::state::map_io_error;
use crate::{ClientError, ClientResult};

const INDENT: &[u8] = b"    ";

/// Whole-file JSON persistence for an [`ExpenseBook`].
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the data file. Any failure yields an empty book.
    pub fn load(&self) -> ExpenseBook {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!("no data file at {}, starting empty", self.path.display());
                return ExpenseBook::new();
            }
            Err(error) => {
                warn!(
                    "cannot read {}, starting empty: {error}",
                    self.path.display()
                );
                return ExpenseBook::new();
            }
        };

        match serde_json::from_str::<ExpenseBook>(&content) {
            Ok(book) => {
                debug!(
                    "loaded {} expenses from {}",
                    book.len(),
                    self.path.display()
                );
                book
            }
            Err(error) => {
                warn!(
                    "{} is not a valid expense list, starting empty: {error}",
                    self.path.display()
                );
                ExpenseBook::new()
            }
        }
    }

    /// Overwrites the data file with the full book.
    pub fn save(&self, book: &ExpenseBook) -> ClientResult<()> {
        let encoded = encode_book(&self.path, book)?;
        fs::write(&self.path, encoded).map_err(|error| map_io_error(&self.path, &error))?;
        debug!("saved {} expenses to {}", book.len(), self.path.display());
        Ok(())
    }
}

// serde_json would write non-finite amounts as `null`, which load rejects.
fn encode_book(path: &Path, book: &ExpenseBook) -> ClientResult<Vec<u8>> {
    if let Some((index, expense)) = book
        .iter()
        .enumerate()
        .find(|(_, expense)| !expense.amount.is_finite())
    {
        return Err(ClientError::store_write_failed(
            path,
            &format!(
                "expense #{} has non-finite amount {}",
                index + 1,
                expense.amount
            ),
        ));
    }

    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    book.serialize(&mut serializer)
        .map_err(|error| ClientError::store_write_failed(path, &error.to_string()))?;
    Ok(buffer)
}
