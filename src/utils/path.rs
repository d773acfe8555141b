//! Path utilities: expand ~ in user supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// `--db` value as an absolute path: `~` expanded, relative paths joined to
/// the working directory. Every command goes through this, `init` included.
pub fn resolve_db_path(path: &str) -> String {
    let expanded = expand_tilde(path);
    let absolute = if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    };
    absolute.to_string_lossy().to_string()
}
