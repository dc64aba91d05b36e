//! Solid entity

use super::EntityCommon;
use crate::types::Vector3;

/// A filled quadrilateral (or triangle, when the last two corners coincide)
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// Common entity data
    pub common: EntityCommon,
    /// First corner (code 10/20/30)
    pub first_corner: Vector3,
    /// Second corner (code 11/21/31)
    pub second_corner: Vector3,
    /// Third corner (code 12/22/32)
    pub third_corner: Vector3,
    /// Fourth corner (code 13/23/33); equals the third for a triangle
    pub fourth_corner: Vector3,
    /// Thickness (code 39)
    pub thickness: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
}

impl Solid {
    /// Create a degenerate solid with all corners at the origin
    pub fn new() -> Self {
        Solid {
            common: EntityCommon::new(),
            first_corner: Vector3::ZERO,
            second_corner: Vector3::ZERO,
            third_corner: Vector3::ZERO,
            fourth_corner: Vector3::ZERO,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl Default for Solid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let solid = Solid::new();
        assert_eq!(solid.first_corner, Vector3::ZERO);
        assert_eq!(solid.normal, Vector3::UNIT_Z);
    }
}
