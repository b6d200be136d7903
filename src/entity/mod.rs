//! Renderable entities built from config records.
//!
//! [`Entity`] is a closed set of variants. Renderers match on it
//! exhaustively, so adding a variant is a compile error everywhere it is
//! drawn until that site handles it.

mod color;
pub mod fallback;

use serde::Serialize;
use shapeshow_fonts::FontHandle;

pub use color::Color;

/// A filled circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub name: String,
    /// Top-left corner of the bounding box, in pixels
    pub position: [f32; 2],
    /// Parsed from config but not applied to `position`
    pub velocity: [f32; 2],
    pub color: Color,
    pub radius: f32,
}

/// A filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub name: String,
    /// Top-left corner, in pixels
    pub position: [f32; 2],
    /// Parsed from config but not applied to `position`
    pub velocity: [f32; 2],
    pub color: Color,
    pub width: f32,
    pub height: f32,
}

/// A text label drawn with a font from the font store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub content: String,
    /// Character size in pixels
    pub font_size: u32,
    pub color: Color,
    pub font: FontHandle,
}

/// One renderable object from the scene config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Entity {
    Text(TextLabel),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Entity {
    /// Shape name, or `None` for text labels (which are unnamed).
    pub fn name(&self) -> Option<&str> {
        match self {
            Entity::Text(_) => None,
            Entity::Circle(circle) => Some(&circle.name),
            Entity::Rectangle(rect) => Some(&rect.name),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Entity::Text(text) => text.color,
            Entity::Circle(circle) => circle.color,
            Entity::Rectangle(rect) => rect.color,
        }
    }

    /// Short variant label used in logs and the text renderer.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Entity::Text(_) => "Text",
            Entity::Circle(_) => "Circle",
            Entity::Rectangle(_) => "Rectangle",
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Entity::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Entity::Rectangle(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextLabel> {
        match self {
            Entity::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Circle> for Entity {
    fn from(circle: Circle) -> Self {
        Entity::Circle(circle)
    }
}

impl From<Rectangle> for Entity {
    fn from(rect: Rectangle) -> Self {
        Entity::Rectangle(rect)
    }
}

impl From<TextLabel> for Entity {
    fn from(text: TextLabel) -> Self {
        Entity::Text(text)
    }
}
