//! Positional attribute access with typed parsing.

use shapeshow_config::ConfigEntityInfo;

use crate::diagnostics::Diagnostic;
use crate::entity::Color;

/// Reads typed values out of a record's attribute list.
///
/// Every parse failure becomes a [`Diagnostic::MalformedAttribute`] naming
/// the slot, so callers can bail out with `?` and substitute a fallback.
pub(crate) struct Attributes<'a> {
    info: &'a ConfigEntityInfo,
}

impl<'a> Attributes<'a> {
    pub(crate) fn new(info: &'a ConfigEntityInfo) -> Self {
        Self { info }
    }

    pub(crate) fn len(&self) -> usize {
        self.info.attributes.len()
    }

    pub(crate) fn text(&self, index: usize) -> Option<&'a str> {
        self.info.attribute(index)
    }

    /// Error unless at least `required` attributes are present.
    pub(crate) fn require(&self, required: usize) -> Result<(), Diagnostic> {
        if self.len() >= required {
            Ok(())
        } else {
            Err(Diagnostic::InsufficientAttributes {
                entity_type: self.info.entity_type.clone(),
                required,
                found: self.len(),
            })
        }
    }

    pub(crate) fn float(&self, index: usize) -> Result<f32, Diagnostic> {
        self.parse(index, "number")
    }

    /// Two consecutive floats starting at `index`.
    pub(crate) fn pair(&self, index: usize) -> Result<[f32; 2], Diagnostic> {
        Ok([self.float(index)?, self.float(index + 1)?])
    }

    /// Three consecutive 0-255 channels starting at `index`.
    pub(crate) fn color(&self, index: usize) -> Result<Color, Diagnostic> {
        Ok(Color::new(
            self.parse(index, "color channel (0-255)")?,
            self.parse(index + 1, "color channel (0-255)")?,
            self.parse(index + 2, "color channel (0-255)")?,
        ))
    }

    fn parse<T: std::str::FromStr>(
        &self,
        index: usize,
        expected: &'static str,
    ) -> Result<T, Diagnostic> {
        let value = self.text(index).unwrap_or_default();
        value.parse().map_err(|_| Diagnostic::MalformedAttribute {
            entity_type: self.info.entity_type.clone(),
            index,
            value: value.to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(attrs: &[&str]) -> ConfigEntityInfo {
        ConfigEntityInfo::new("Circle", attrs.iter().copied())
    }

    #[test]
    fn test_require() {
        let record = info(&["a", "b"]);
        let attrs = Attributes::new(&record);
        assert!(attrs.require(2).is_ok());
        assert_eq!(
            attrs.require(3),
            Err(Diagnostic::InsufficientAttributes {
                entity_type: "Circle".to_string(),
                required: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_float_and_pair() {
        let record = info(&["1.5", "-2", "1e2"]);
        let attrs = Attributes::new(&record);
        assert_eq!(attrs.float(0), Ok(1.5));
        assert_eq!(attrs.pair(1), Ok([-2.0, 100.0]));
    }

    #[test]
    fn test_color_rejects_out_of_range_channel() {
        let record = info(&["10", "300", "0"]);
        let attrs = Attributes::new(&record);
        match attrs.color(0) {
            Err(Diagnostic::MalformedAttribute { index, value, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "300");
            }
            other => panic!("expected malformed channel, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_slot_is_malformed_empty_value() {
        let record = info(&[]);
        let attrs = Attributes::new(&record);
        assert!(matches!(
            attrs.float(4),
            Err(Diagnostic::MalformedAttribute { index: 4, .. })
        ));
    }
}
