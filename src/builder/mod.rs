//! Turning config records into entities.
//!
//! Both builders are total: they always return a fully built [`Entity`].
//! When a record cannot be honored the type's fixed fallback is returned
//! together with a [`Diagnostic`] explaining why.
//!
//! # Numeric attributes
//!
//! A token that fails to parse in a numeric slot is handled exactly like a
//! missing token: the whole record resolves to its type's fallback. The one
//! exception is text records, whose optional fields default individually.

mod attributes;
mod entity;
mod shape;

use crate::diagnostics::Diagnostic;
use crate::entity::Entity;

pub use entity::{DEFAULT_FONT_SIZE, DEFAULT_TEXT, EntityBuilder};
pub use shape::{CIRCLE_ATTRIBUTES, RECTANGLE_ATTRIBUTES, build_shape};

/// Result of building one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    pub entity: Entity,
    /// Present when `entity` is a fallback or took a default value
    pub diagnostic: Option<Diagnostic>,
}

impl Built {
    pub fn ok(entity: impl Into<Entity>) -> Self {
        Self {
            entity: entity.into(),
            diagnostic: None,
        }
    }

    pub fn degraded(entity: impl Into<Entity>, diagnostic: Diagnostic) -> Self {
        Self {
            entity: entity.into(),
            diagnostic: Some(diagnostic),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}
