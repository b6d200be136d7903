//! Closed classifications of config type names.

use std::fmt;

use serde::Serialize;

/// Kind of geometric shape named by a config record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    /// Recognized but not buildable; always resolves to a fallback
    Triangle,
    Unknown,
}

impl ShapeKind {
    /// Classify a type name. Matching is exact and case-sensitive.
    pub fn classify(type_name: &str) -> Self {
        match type_name {
            "Circle" => ShapeKind::Circle,
            "Rectangle" => ShapeKind::Rectangle,
            "Triangle" => ShapeKind::Triangle,
            _ => ShapeKind::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level kind of entity named by a config record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    /// `Font` records, built into text labels
    Text,
    /// Any of the shape names, including `Triangle`
    Shape,
    Unknown,
}

impl EntityKind {
    /// Classify a type name. Matching is exact and case-sensitive.
    pub fn classify(type_name: &str) -> Self {
        match type_name {
            "Font" => EntityKind::Text,
            "Circle" | "Rectangle" | "Triangle" => EntityKind::Shape,
            _ => EntityKind::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Text => "Text",
            EntityKind::Shape => "Shape",
            EntityKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
