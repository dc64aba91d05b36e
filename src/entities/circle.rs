//! Circle entity

use super::EntityCommon;
use crate::types::Vector3;

/// A circle defined by center and radius
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (code 10/20/30)
    pub center: Vector3,
    /// Radius (code 40)
    pub radius: f64,
    /// Thickness (code 39)
    pub thickness: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
}

impl Circle {
    /// Create a new circle at the origin with zero radius
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 0.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a circle from center and radius
    pub fn from_center(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let circle = Circle::new();
        assert_eq!(circle.radius, 0.0);
        assert_eq!(circle.normal, Vector3::UNIT_Z);
    }
}
