//! Font loading for shapeshow text entities.
//!
//! Text records name a font file by path. The [`FontStore`] reads and
//! validates each path once, keeps the bytes alive for the rest of the
//! process, and hands out copyable [`FontHandle`]s that text entities carry.
//!
//! The entity builder only depends on the [`FontSource`] trait so tests can
//! substitute an in-memory source.

pub mod error;
pub mod font_store;

// Re-export main types for convenience
pub use error::FontError;
pub use font_store::{FontData, FontHandle, FontSource, FontStore};
