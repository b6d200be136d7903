//! Shared integration test helpers for shapeshow.
//!
//! ```ignore
//! mod common;
//! use common::{StubFonts, record};
//! ```

#![allow(dead_code)]

use shapeshow_config::{ConfigEntityInfo, parse_line};
use shapeshow_fonts::{FontError, FontHandle, FontSource};
use std::path::PathBuf;

/// In-memory font source: paths listed in `available` load, everything
/// else fails with a read error. Records every load request.
#[derive(Debug, Default)]
pub struct StubFonts {
    pub available: Vec<String>,
    pub requests: Vec<String>,
}

impl StubFonts {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            available: paths.iter().map(|p| p.to_string()).collect(),
            requests: Vec::new(),
        }
    }
}

impl FontSource for StubFonts {
    fn load(&mut self, path: &str) -> Result<FontHandle, FontError> {
        self.requests.push(path.to_string());
        match self.available.iter().position(|p| p == path) {
            Some(index) => Ok(FontHandle::new(index)),
            None => Err(FontError::Read {
                path: PathBuf::from(path),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such font"),
            }),
        }
    }
}

/// Parse one config line.
pub fn record(line: &str) -> ConfigEntityInfo {
    parse_line(line)
}
