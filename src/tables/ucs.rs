//! User coordinate system table record

use super::TableRecord;
use crate::types::Vector3;

/// A user coordinate system table record
#[derive(Debug, Clone, PartialEq)]
pub struct Ucs {
    /// Coordinate system name (code 2)
    pub name: String,
    /// Origin (code 10/20/30)
    pub origin: Vector3,
    /// X-axis direction (code 11/21/31)
    pub x_axis: Vector3,
    /// Y-axis direction (code 12/22/32)
    pub y_axis: Vector3,
}

impl Ucs {
    /// Create a new coordinate system aligned with the world axes
    pub fn new(name: impl Into<String>) -> Self {
        Ucs {
            name: name.into(),
            origin: Vector3::ZERO,
            x_axis: Vector3::new(1.0, 0.0, 0.0),
            y_axis: Vector3::new(0.0, 1.0, 0.0),
        }
    }
}

impl TableRecord for Ucs {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_aligned_defaults() {
        let ucs = Ucs::new("PLAN");
        assert_eq!(ucs.x_axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(ucs.y_axis, Vector3::new(0.0, 1.0, 0.0));
    }
}
