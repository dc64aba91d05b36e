//! Ellipse entity

use std::f64::consts::PI;

use super::EntityCommon;
use crate::types::Vector3;

/// An ellipse defined by center, major-axis endpoint, and axis ratio
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (code 10/20/30)
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center (code 11/21/31)
    pub major_axis: Vector3,
    /// Ratio of minor to major axis (code 40)
    pub minor_ratio: f64,
    /// Start parameter in radians (code 41); 0 for a full ellipse
    pub start_parameter: f64,
    /// End parameter in radians (code 42); 2π for a full ellipse
    pub end_parameter: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
}

impl Ellipse {
    /// Create a new degenerate full ellipse at the origin
    pub fn new() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            major_axis: Vector3::ZERO,
            minor_ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: 2.0 * PI,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create an ellipse from its geometry
    pub fn from_center(center: Vector3, major_axis: Vector3, minor_ratio: f64) -> Self {
        Ellipse {
            center,
            major_axis,
            minor_ratio,
            ..Self::new()
        }
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ellipse = Ellipse::new();
        assert_eq!(ellipse.minor_ratio, 1.0);
        assert_eq!(ellipse.start_parameter, 0.0);
        assert_eq!(ellipse.end_parameter, 2.0 * PI);
    }
}
