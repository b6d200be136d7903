//! Circle and rectangle construction.

use shapeshow_config::{ConfigEntityInfo, ShapeKind};

use super::Built;
use super::attributes::Attributes;
use crate::diagnostics::Diagnostic;
use crate::entity::{Circle, Rectangle, fallback};

/// name, px, py, vx, vy, r, g, b, radius
pub const CIRCLE_ATTRIBUTES: usize = 9;
/// name, px, py, vx, vy, r, g, b, width, height
pub const RECTANGLE_ATTRIBUTES: usize = 10;

/// Build a shape entity from a record.
///
/// Records whose type is not a buildable shape resolve to the
/// `UnknownShape` sentinel circle.
pub fn build_shape(info: &ConfigEntityInfo) -> Built {
    match ShapeKind::classify(&info.entity_type) {
        ShapeKind::Circle => match parse_circle(&Attributes::new(info)) {
            Ok(circle) => Built::ok(circle),
            Err(diagnostic) => Built::degraded(fallback::fallback_circle(), diagnostic),
        },
        ShapeKind::Rectangle => match parse_rectangle(&Attributes::new(info)) {
            Ok(rect) => Built::ok(rect),
            Err(diagnostic) => Built::degraded(fallback::fallback_rectangle(), diagnostic),
        },
        ShapeKind::Triangle | ShapeKind::Unknown => Built::degraded(
            fallback::unknown_shape(),
            Diagnostic::UnsupportedShape {
                entity_type: info.entity_type.clone(),
            },
        ),
    }
}

fn parse_circle(attrs: &Attributes<'_>) -> Result<Circle, Diagnostic> {
    attrs.require(CIRCLE_ATTRIBUTES)?;
    Ok(Circle {
        name: attrs.text(0).unwrap_or_default().to_string(),
        position: attrs.pair(1)?,
        velocity: attrs.pair(3)?,
        color: attrs.color(5)?,
        radius: attrs.float(8)?,
    })
}

fn parse_rectangle(attrs: &Attributes<'_>) -> Result<Rectangle, Diagnostic> {
    attrs.require(RECTANGLE_ATTRIBUTES)?;
    Ok(Rectangle {
        name: attrs.text(0).unwrap_or_default().to_string(),
        position: attrs.pair(1)?,
        velocity: attrs.pair(3)?,
        color: attrs.color(5)?,
        width: attrs.float(8)?,
        height: attrs.float(9)?,
    })
}
