//! Fixed placeholder entities substituted when a record cannot be built.

use super::{Circle, Color, Rectangle};

/// Circle record with too few or malformed attributes.
pub const FALLBACK_CIRCLE_NAME: &str = "FallbackCircle";
/// Rectangle record with too few or malformed attributes.
pub const FALLBACK_RECT_NAME: &str = "FallbackRect";
/// Shape type that is recognized but not buildable (Triangle).
pub const UNKNOWN_SHAPE_NAME: &str = "UnknownShape";
/// Font record whose font could not be loaded.
pub const DUMMY_TEXT_NAME: &str = "DummyText";
/// Record with an unrecognized type name.
pub const UNKNOWN_ENTITY_NAME: &str = "UnknownEntity";

fn circle(name: &str, position: [f32; 2], color: Color, radius: f32) -> Circle {
    Circle {
        name: name.to_string(),
        position,
        velocity: [0.0, 0.0],
        color,
        radius,
    }
}

pub fn fallback_circle() -> Circle {
    circle(FALLBACK_CIRCLE_NAME, [0.0, 0.0], Color::new(255, 255, 255), 10.0)
}

pub fn fallback_rectangle() -> Rectangle {
    Rectangle {
        name: FALLBACK_RECT_NAME.to_string(),
        position: [0.0, 0.0],
        velocity: [0.0, 0.0],
        color: Color::new(200, 200, 200),
        width: 20.0,
        height: 15.0,
    }
}

pub fn unknown_shape() -> Circle {
    circle(UNKNOWN_SHAPE_NAME, [0.0, 0.0], Color::new(255, 0, 255), 8.0)
}

pub fn dummy_text() -> Circle {
    circle(DUMMY_TEXT_NAME, [10.0, 10.0], Color::new(100, 100, 100), 5.0)
}

pub fn unknown_entity() -> Circle {
    circle(UNKNOWN_ENTITY_NAME, [0.0, 0.0], Color::new(128, 128, 128), 6.0)
}
