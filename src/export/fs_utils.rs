// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → asks the user for confirmation
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !confirm("Overwrite?")? {
        return Err(AppError::Export(format!(
            "cancelled: '{}' not overwritten",
            path.display()
        )));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
