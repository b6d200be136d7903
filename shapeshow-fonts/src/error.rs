//! Typed error variants for the shapeshow-fonts crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    /// The record did not name a font file.
    #[error("no font path given")]
    EmptyPath,

    /// The font file could not be read from disk.
    #[error("failed to read font '{}': {source}", path.display())]
    Read {
        /// Path to the font file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a TrueType/OpenType font.
    #[error("'{}' is not a valid font file", path.display())]
    InvalidData {
        /// Path to the rejected file.
        path: PathBuf,
    },
}
