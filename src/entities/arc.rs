//! Arc entity

use super::EntityCommon;
use crate::types::Vector3;

/// A circular arc, angles in degrees counter-clockwise from the X axis
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (code 10/20/30)
    pub center: Vector3,
    /// Radius (code 40)
    pub radius: f64,
    /// Start angle in degrees (code 50)
    pub start_angle: f64,
    /// End angle in degrees (code 51)
    pub end_angle: f64,
    /// Thickness (code 39)
    pub thickness: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
}

impl Arc {
    /// Create a new full arc at the origin with zero radius
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create an arc from its geometry
    pub fn from_center(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}
