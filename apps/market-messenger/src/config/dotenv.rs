//! `.env` file discovery.

use std::path::{Path, PathBuf};

/// Nearest `.env` file in `start` or any of its ancestors.
#[must_use]
pub fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|path| path.is_file())
}

/// Load the nearest `.env` file above the current directory into the process
/// environment. Variables already set are kept.
///
/// Returns the file that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let path = find_dotenv(&cwd)?;

    match dotenvy::from_path(&path) {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("Failed to load {}: {e}", path.display());
            None
        }
    }
}
