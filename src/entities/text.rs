//! Text entity

use super::EntityCommon;
use crate::types::Vector3;

/// Horizontal justification values carried by code 72
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalJustification {
    #[default]
    Left,
    Center,
    Right,
    Aligned,
    Middle,
    Fit,
}

impl HorizontalJustification {
    /// Map the wire value; out-of-range values fall back to left
    pub fn from_raw(value: i16) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Aligned,
            4 => Self::Middle,
            5 => Self::Fit,
            _ => Self::Left,
        }
    }

    /// The wire value
    pub fn raw_value(&self) -> i16 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
            Self::Aligned => 3,
            Self::Middle => 4,
            Self::Fit => 5,
        }
    }
}

/// Vertical justification values carried by code 73
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalJustification {
    #[default]
    Baseline,
    Bottom,
    Middle,
    Top,
}

impl VerticalJustification {
    /// Map the wire value; out-of-range values fall back to baseline
    pub fn from_raw(value: i16) -> Self {
        match value {
            1 => Self::Bottom,
            2 => Self::Middle,
            3 => Self::Top,
            _ => Self::Baseline,
        }
    }

    /// The wire value
    pub fn raw_value(&self) -> i16 {
        match self {
            Self::Baseline => 0,
            Self::Bottom => 1,
            Self::Middle => 2,
            Self::Top => 3,
        }
    }
}

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (code 10/20/30)
    pub location: Vector3,
    /// Text height (code 40)
    pub height: f64,
    /// The text itself (code 1)
    pub value: String,
    /// Rotation angle in degrees (code 50)
    pub rotation: f64,
    /// Relative X scale factor (code 41)
    pub relative_x_scale: f64,
    /// Oblique angle in degrees (code 51)
    pub oblique_angle: f64,
    /// Text style name (code 7)
    pub style_name: String,
    /// Horizontal justification (code 72)
    pub horizontal_justification: HorizontalJustification,
    /// Vertical justification (code 73)
    pub vertical_justification: VerticalJustification,
    /// Second alignment point (code 11/21/31), used by non-default justifications
    pub second_alignment_point: Vector3,
    /// Thickness (code 39)
    pub thickness: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
}

impl Text {
    /// Create an empty text entity at the origin
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            location: Vector3::ZERO,
            height: 1.0,
            value: String::new(),
            rotation: 0.0,
            relative_x_scale: 1.0,
            oblique_angle: 0.0,
            style_name: "STANDARD".to_string(),
            horizontal_justification: HorizontalJustification::Left,
            vertical_justification: VerticalJustification::Baseline,
            second_alignment_point: Vector3::ZERO,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a text entity with a value and insertion point
    pub fn from_value(location: Vector3, height: f64, value: impl Into<String>) -> Self {
        Text {
            location,
            height,
            value: value.into(),
            ..Self::new()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let text = Text::new();
        assert_eq!(text.height, 1.0);
        assert_eq!(text.style_name, "STANDARD");
        assert_eq!(
            text.horizontal_justification,
            HorizontalJustification::Left
        );
        assert_eq!(text.vertical_justification, VerticalJustification::Baseline);
    }

    #[test]
    fn test_justification_raw_roundtrip() {
        for raw in 0..=5 {
            assert_eq!(HorizontalJustification::from_raw(raw).raw_value(), raw);
        }
        for raw in 0..=3 {
            assert_eq!(VerticalJustification::from_raw(raw).raw_value(), raw);
        }
    }
}
