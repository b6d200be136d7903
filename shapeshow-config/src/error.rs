//! Typed error variants for the shapeshow-config crate.
//!
//! Only reading the config file can fail. Parsing the text itself is total:
//! malformed lines become records that the entity builder resolves to
//! fallbacks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when locating or reading the scene config file.
///
/// # Example
///
/// ```rust,no_run
/// use shapeshow_config::{ConfigError, load_config_file};
///
/// match load_config_file("config.txt") {
///     Ok(content) => println!("{content}"),
///     Err(ConfigError::NotFound { path }) => eprintln!("missing: {}", path.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file exists at the resolved config path.
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read (permissions, not UTF-8, ...).
    #[error("I/O error reading config '{}': {source}", path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
