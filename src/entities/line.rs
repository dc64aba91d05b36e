//! Line entity

use super::EntityCommon;
use crate::types::Vector3;

/// A line defined by two endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point (code 10/20/30)
    pub p1: Vector3,
    /// End point (code 11/21/31)
    pub p2: Vector3,
    /// Thickness (code 39)
    pub thickness: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            p1: Vector3::ZERO,
            p2: Vector3::ZERO,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a new line between two points
    pub fn from_points(p1: Vector3, p2: Vector3) -> Self {
        Line {
            p1,
            p2,
            ..Self::new()
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let line = Line::new();
        assert_eq!(line.p1, Vector3::ZERO);
        assert_eq!(line.p2, Vector3::ZERO);
        assert_eq!(line.thickness, 0.0);
        assert_eq!(line.normal, Vector3::UNIT_Z);
    }
}
