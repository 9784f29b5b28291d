//! `~` expansion and output-path checks for the export and backup commands.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

/// Replace a leading `~` with the home directory. Other paths are returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with(['/', '\\']) => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Resolve a user-supplied output file. `what` names the file in the error.
pub fn absolute_output(raw: &str, what: &str) -> AppResult<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::InvalidPath(format!("{what} path is empty")));
    }

    let path = expand_tilde(raw);
    if !path.is_absolute() {
        return Err(AppError::InvalidPath(format!(
            "{what} path must be absolute: {raw}"
        )));
    }
    Ok(path)
}
