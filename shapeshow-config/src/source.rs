//! Locating and reading the scene config file.

use std::path::{Path, PathBuf};

use crate::defaults::CONFIG_FILE_NAME;
use crate::error::ConfigError;

/// Resolve the config file path from the optional `--config_file_path` value.
///
/// The file name is appended to `dir` as plain text, with no separator
/// inserted: `Some("scenes/")` gives `scenes/config.txt`, while
/// `Some("scenes")` gives `scenesconfig.txt`. Without a directory the file
/// is looked up in the working directory.
pub fn resolve_config_path(dir: Option<&str>) -> PathBuf {
    match dir {
        Some(dir) => PathBuf::from(format!("{dir}{CONFIG_FILE_NAME}")),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Read the whole config file in one blocking call.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<String, ConfigError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Read config file {} ({} bytes)",
        path.display(),
        content.len()
    );
    Ok(content)
}
