//! Top-level record dispatch.

use shapeshow_config::{ConfigEntityInfo, EntityKind};
use shapeshow_fonts::{FontError, FontSource};

use super::Built;
use super::attributes::Attributes;
use super::shape::build_shape;
use crate::diagnostics::Diagnostic;
use crate::entity::{Color, TextLabel, fallback};

/// Text used when a `Font` record names no content.
pub const DEFAULT_TEXT: &str = "Sample";
/// Character size used when a `Font` record names no size.
pub const DEFAULT_FONT_SIZE: u32 = 20;

/// Builds entities of any kind, loading fonts for text records.
///
/// The font source is borrowed for the builder's lifetime; fonts it loads
/// outlive every entity built here.
pub struct EntityBuilder<'f, F: FontSource> {
    fonts: &'f mut F,
}

impl<'f, F: FontSource> EntityBuilder<'f, F> {
    pub fn new(fonts: &'f mut F) -> Self {
        Self { fonts }
    }

    /// Build one record. Never fails; see [`Built`].
    pub fn build(&mut self, info: &ConfigEntityInfo) -> Built {
        match EntityKind::classify(&info.entity_type) {
            EntityKind::Text => self.build_text(info),
            EntityKind::Shape => build_shape(info),
            EntityKind::Unknown => Built::degraded(
                fallback::unknown_entity(),
                Diagnostic::UnknownEntity {
                    entity_type: info.entity_type.clone(),
                },
            ),
        }
    }

    fn build_text(&mut self, info: &ConfigEntityInfo) -> Built {
        let attrs = Attributes::new(info);
        let path = attrs.text(0).unwrap_or_default();

        let loaded = if path.is_empty() {
            Err(FontError::EmptyPath)
        } else {
            self.fonts.load(path)
        };
        let font = match loaded {
            Ok(handle) => handle,
            Err(err) => {
                return Built::degraded(
                    fallback::dummy_text(),
                    Diagnostic::FontUnavailable {
                        path: path.to_string(),
                        reason: err.to_string(),
                    },
                );
            }
        };

        let content = attrs.text(1).unwrap_or(DEFAULT_TEXT).to_string();

        let mut diagnostic = None;
        let font_size = match attrs.text(2) {
            None => DEFAULT_FONT_SIZE,
            Some(value) => value.parse::<u32>().unwrap_or_else(|_| {
                diagnostic = Some(Diagnostic::InvalidFontSize {
                    value: value.to_string(),
                    default: DEFAULT_FONT_SIZE,
                });
                DEFAULT_FONT_SIZE
            }),
        };

        // A partial or malformed color stays white without a diagnostic
        let color = if attrs.len() > 5 {
            attrs.color(3).unwrap_or(Color::WHITE)
        } else {
            Color::WHITE
        };

        Built {
            entity: TextLabel {
                content,
                font_size,
                color,
                font,
            }
            .into(),
            diagnostic,
        }
    }
}

