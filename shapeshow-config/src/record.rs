//! Config records: one per non-blank line of the scene config.

use std::fmt;

use serde::Serialize;

use crate::defaults::BLANK_LINE_CHARS;
use crate::tokenizer::tokenize;

/// A parsed config line: the declared type name plus its attribute tokens.
///
/// Records are built once by [`parse_line`] and never modified; the entity
/// builder reads them to decide what to construct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigEntityInfo {
    /// First token of the line (`Circle`, `Rectangle`, `Font`, ...)
    pub entity_type: String,
    /// Remaining tokens, in line order
    pub attributes: Vec<String>,
}

impl ConfigEntityInfo {
    /// Create a record from a type name and attribute tokens.
    pub fn new<I, S>(entity_type: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entity_type: entity_type.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Attribute at `index`, if present.
    pub fn attribute(&self, index: usize) -> Option<&str> {
        self.attributes.get(index).map(String::as_str)
    }
}

impl fmt::Display for ConfigEntityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entity Type: {}", self.entity_type)?;
        write!(f, "Attributes: [{}]", self.attributes.join(" "))
    }
}

/// Parse a single config line into a record.
///
/// The first token becomes the type name and the rest become attributes.
/// A line without tokens yields an empty record; this never fails.
pub fn parse_line(line: &str) -> ConfigEntityInfo {
    let mut tokens = tokenize(line).into_iter();
    match tokens.next() {
        Some(entity_type) => ConfigEntityInfo::new(entity_type, tokens),
        None => ConfigEntityInfo::default(),
    }
}

/// Parse the full text of a config file into records, in file order.
///
/// Lines that are empty or contain only spaces, tabs, CR or LF are skipped
/// without producing a record.
pub fn populate(content: &str) -> Vec<ConfigEntityInfo> {
    let records: Vec<ConfigEntityInfo> = content
        .lines()
        .filter(|line| !is_blank(line))
        .map(parse_line)
        .collect();
    log::debug!("Parsed {} config records", records.len());
    records
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| BLANK_LINE_CHARS.contains(&c))
}
