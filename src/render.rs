//! Renderer seam.
//!
//! Drawing is owned by whatever consumes the collection. The core only
//! defines the [`Renderer`] trait; [`TextRenderer`] is a headless
//! implementation that describes each frame as plain text.

use std::io::Write;

use anyhow::Result;
use shapeshow_fonts::FontStore;

use crate::collection::EntityCollection;
use crate::entity::Entity;

/// Draws the entity collection once per frame.
pub trait Renderer {
    /// Draw frame number `frame` (starting at 0).
    fn draw_frame(&mut self, frame: u64, entities: &EntityCollection) -> Result<()>;
}

/// Writes a HUD line and one line per entity for every frame.
pub struct TextRenderer<'a, W: Write> {
    out: W,
    fonts: &'a FontStore,
}

impl<'a, W: Write> TextRenderer<'a, W> {
    pub fn new(out: W, fonts: &'a FontStore) -> Self {
        Self { out, fonts }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn describe(&self, entity: &Entity) -> String {
        let body = match entity {
            Entity::Text(text) => match self.fonts.get(text.font) {
                Some(font) => format!(
                    "Text \"{}\" size={} font={} missing_glyphs={}",
                    text.content,
                    text.font_size,
                    font.family().unwrap_or("unknown"),
                    font.missing_glyphs(&text.content)
                ),
                None => format!(
                    "Text \"{}\" size={} font=unloaded",
                    text.content, text.font_size
                ),
            },
            Entity::Circle(circle) => format!(
                "Circle {} at ({}, {}) r={}",
                circle.name, circle.position[0], circle.position[1], circle.radius
            ),
            Entity::Rectangle(rect) => format!(
                "Rectangle {} at ({}, {}) {}x{}",
                rect.name, rect.position[0], rect.position[1], rect.width, rect.height
            ),
        };
        format!("{body} color={:?}", entity.color().as_array())
    }
}

impl<W: Write> Renderer for TextRenderer<'_, W> {
    fn draw_frame(&mut self, frame: u64, entities: &EntityCollection) -> Result<()> {
        writeln!(self.out, "-- frame {frame} --")?;
        writeln!(self.out, "Entities loaded: {}", entities.len())?;
        for entity in entities {
            let line = self.describe(entity);
            writeln!(self.out, "  {line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
