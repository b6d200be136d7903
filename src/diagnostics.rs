//! Warnings produced while building entities.
//!
//! A diagnostic never stops construction: the builder always returns a
//! complete entity, and the diagnostic describes why that entity is a
//! fallback (or why one of its fields took a default). The collection layer
//! logs them; tests inspect them directly.

use thiserror::Error;

/// What went wrong with a single config record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Fewer attribute tokens than the type's layout needs.
    #[error("{entity_type} needs {required} attributes, found {found}; using fallback")]
    InsufficientAttributes {
        entity_type: String,
        required: usize,
        found: usize,
    },

    /// An attribute token could not be parsed as the number its slot needs.
    #[error(
        "{entity_type} attribute {index} ('{value}') is not a valid {expected}; using fallback"
    )]
    MalformedAttribute {
        entity_type: String,
        index: usize,
        value: String,
        expected: &'static str,
    },

    /// A recognized shape type that has no builder (Triangle).
    #[error("Unknown or unsupported shape type: {entity_type}")]
    UnsupportedShape { entity_type: String },

    /// The type name matched nothing.
    #[error("Unknown entity type: {entity_type}")]
    UnknownEntity { entity_type: String },

    /// A text record's font could not be loaded; a placeholder shape is used.
    #[error("Failed to load font '{path}': {reason}; using dummy shape")]
    FontUnavailable { path: String, reason: String },

    /// The text size was not a non-negative integer; the default is kept.
    #[error("Font size '{value}' is not a valid size; using {default}")]
    InvalidFontSize { value: String, default: u32 },
}

/// A diagnostic tied to the zero-based position of its record in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDiagnostic {
    pub record: usize,
    pub diagnostic: Diagnostic,
}
