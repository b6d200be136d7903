//! shapeshow builds typed, renderable entities from a line-oriented scene
//! config.
//!
//! ```text
//! config.txt → populate → ConfigEntityInfo[] → EntityBuilder → EntityCollection → Renderer
//! ```
//!
//! Parsing lives in `shapeshow-config`, font loading in `shapeshow-fonts`.
//! This crate owns the entity model, the builders and the collection that a
//! renderer draws each frame.

pub mod app;
pub mod builder;
pub mod cli;
pub mod collection;
pub mod diagnostics;
pub mod entity;
pub mod logging;
pub mod render;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types for convenience
pub use builder::{Built, EntityBuilder, build_shape};
pub use collection::{EntityCollection, SceneLoad};
pub use diagnostics::{Diagnostic, RecordDiagnostic};
pub use entity::{Circle, Color, Entity, Rectangle, TextLabel};
pub use render::{Renderer, TextRenderer};
