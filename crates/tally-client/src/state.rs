use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Resolves the data file location, falling back to `expenses.json` in the
/// working directory.
pub fn resolve_data_path(file_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match file_override {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    };

    absolutize(&candidate)
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return ClientError::store_permission_denied(path, &error.to_string());
    }

    ClientError::store_write_failed(path, &error.to_string())
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::store_path_unresolved(path, &error.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::{DEFAULT_DATA_FILE, map_io_error, resolve_data_path};

    #[test]
    fn default_path_lands_in_working_directory() {
        let resolved = resolve_data_path(None);
        assert!(resolved.is_ok());
        if let Ok(path) = resolved {
            assert!(path.is_absolute());
            assert!(path.ends_with(DEFAULT_DATA_FILE));
        }
    }

    #[test]
    fn absolute_override_is_kept_verbatim() {
        let resolved = resolve_data_path(Some(Path::new("/var/tmp/spending.json")));
        assert!(resolved.is_ok());
        if let Ok(path) = resolved {
            assert_eq!(path, Path::new("/var/tmp/spending.json"));
        }
    }

    #[test]
    fn permission_denied_gets_permission_recovery_hint() {
        let error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mapped = map_io_error(Path::new("/root/expenses.json"), &error);
        assert_eq!(mapped.code, "store_write_failed");
        assert!(mapped.recovery_steps[0].contains("Grant write access"));
    }
}
