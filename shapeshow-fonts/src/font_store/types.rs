//! Font data types.

use std::sync::Arc;

use swash::{CacheKey, FontRef};

/// Owned, validated font bytes.
///
/// Only the face offset and cache key are kept alongside the bytes; a
/// `FontRef` borrowing the data is rebuilt on demand by [`FontData::font_ref`].
#[derive(Clone)]
pub struct FontData {
    data: Arc<Vec<u8>>,
    offset: u32,
    key: CacheKey,
    family: Option<String>,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontData {
    /// Validate font bytes using face index 0.
    ///
    /// Returns `None` if the bytes are not a font swash can parse.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        let (offset, key) = {
            let font_ref = FontRef::from_index(&data, 0)?;
            (font_ref.offset, font_ref.key)
        };
        let family = family_name(&data);
        Some(FontData {
            data: Arc::new(data),
            offset,
            key,
            family,
        })
    }

    /// Swash font reference for glyph lookups and rasterization.
    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: self.data.as_slice(),
            offset: self.offset,
            key: self.key,
        }
    }

    /// Family name reported by the font's name table, if any.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Number of characters in `text` the font has no glyph for.
    ///
    /// Whitespace is not counted.
    pub fn missing_glyphs(&self, text: &str) -> usize {
        let charmap = self.font_ref().charmap();
        text.chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| charmap.map(c) == 0)
            .count()
    }
}

fn family_name(data: &[u8]) -> Option<String> {
    let mut db = fontdb::Database::new();
    db.load_font_data(data.to_vec());
    db.faces()
        .next()
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
}
