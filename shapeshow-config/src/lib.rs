//! Scene configuration parsing for shapeshow.
//!
//! This crate turns the raw text of a scene config file into an ordered list
//! of [`ConfigEntityInfo`] records. It includes:
//!
//! - A whitespace line tokenizer
//! - The record parser (`parse_line`) and the file-level `populate` pass
//! - Closed classifiers for shape and entity type names
//! - Config file path resolution and loading
//!
//! # Format
//!
//! ```text
//! <EntityType> <attr1> <attr2> ... <attrN>
//! ```
//!
//! One record per line. Blank lines are ignored; there is no comment or
//! quoting syntax. Interpreting attributes is left to the entity builder.

pub mod defaults;
pub mod error;
pub mod record;
pub mod source;
pub mod tokenizer;
mod types;

// Re-export main types for convenience
pub use error::ConfigError;
pub use record::{ConfigEntityInfo, parse_line, populate};
pub use source::{load_config_file, resolve_config_path};
pub use tokenizer::tokenize;
pub use types::{EntityKind, ShapeKind};
