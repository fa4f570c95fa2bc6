mod state;

pub use state::StateFile;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/resolve[-dev]/` based on RESOLVE_ENV.
///
/// Set RESOLVE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESOLVE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("resolve-dev")
    } else {
        base_dir.join("resolve")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
