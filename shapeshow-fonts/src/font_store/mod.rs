//! Process-wide font storage.
//!
//! Fonts are loaded from disk on first use and kept until the store is
//! dropped. Every text entity built from the same path shares one load.

mod types;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::error::FontError;

pub use types::FontData;

/// Index of a loaded font inside a [`FontStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FontHandle(usize);

impl FontHandle {
    /// Handle for slot `index`. Only meaningful to the source that issued it.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Anything that can turn a font path into a handle.
///
/// The entity builder is generic over this trait; [`FontStore`] is the
/// filesystem-backed implementation.
pub trait FontSource {
    /// Load (or look up) the font at `path`.
    fn load(&mut self, path: &str) -> Result<FontHandle, FontError>;
}

/// Owns every font loaded during the process.
#[derive(Debug, Default)]
pub struct FontStore {
    fonts: Vec<FontData>,
    by_path: HashMap<String, FontHandle>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font data behind a handle issued by this store.
    pub fn get(&self, handle: FontHandle) -> Option<&FontData> {
        self.fonts.get(handle.0)
    }

    /// Number of distinct fonts loaded.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn read_font(path: &str) -> Result<FontData, FontError> {
        let file = Path::new(path);
        let bytes = std::fs::read(file).map_err(|source| FontError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        FontData::new(bytes).ok_or_else(|| FontError::InvalidData {
            path: file.to_path_buf(),
        })
    }
}

impl FontSource for FontStore {
    fn load(&mut self, path: &str) -> Result<FontHandle, FontError> {
        if path.is_empty() {
            return Err(FontError::EmptyPath);
        }
        if let Some(&handle) = self.by_path.get(path) {
            log::trace!("Font cache hit: {}", path);
            return Ok(handle);
        }

        log::info!("Attempting to load font: {}", path);
        let font = Self::read_font(path)?;
        log::info!(
            "Successfully loaded font: {} (family: {})",
            path,
            font.family().unwrap_or("unknown")
        );

        let handle = FontHandle(self.fonts.len());
        self.fonts.push(font);
        self.by_path.insert(path.to_string(), handle);
        Ok(handle)
    }
}
