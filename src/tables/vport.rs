//! Viewport table record

use super::TableRecord;
use crate::types::Vector3;

/// A viewport table record
#[derive(Debug, Clone, PartialEq)]
pub struct VPort {
    /// Viewport name (code 2)
    pub name: String,
    /// Lower-left window corner (code 10/20)
    pub lower_left: Vector3,
    /// Upper-right window corner (code 11/21)
    pub upper_right: Vector3,
    /// View center (code 12/22)
    pub view_center: Vector3,
    /// Snap base point (code 13/23)
    pub snap_base: Vector3,
    /// Snap spacing (code 14/24)
    pub snap_spacing: Vector3,
    /// Grid spacing (code 15/25)
    pub grid_spacing: Vector3,
    /// View direction from target (code 16/26/36)
    pub view_direction: Vector3,
    /// View target point (code 17/27/37)
    pub view_target: Vector3,
    /// View height (code 40)
    pub view_height: f64,
    /// Viewport aspect ratio (code 41)
    pub aspect_ratio: f64,
    /// Lens length (code 42)
    pub lens_length: f64,
    /// Front clipping plane offset (code 43)
    pub front_clip: f64,
    /// Back clipping plane offset (code 44)
    pub back_clip: f64,
    /// Snap rotation angle (code 50)
    pub snap_rotation: f64,
    /// View twist angle (code 51)
    pub view_twist: f64,
}

impl VPort {
    /// The name of the active viewport record
    pub const ACTIVE: &'static str = "*ACTIVE";

    /// Create a new viewport record
    pub fn new(name: impl Into<String>) -> Self {
        VPort {
            name: name.into(),
            lower_left: Vector3::ZERO,
            upper_right: Vector3::ZERO,
            view_center: Vector3::ZERO,
            snap_base: Vector3::ZERO,
            snap_spacing: Vector3::ZERO,
            grid_spacing: Vector3::ZERO,
            view_direction: Vector3::ZERO,
            view_target: Vector3::ZERO,
            view_height: 0.0,
            aspect_ratio: 0.0,
            lens_length: 0.0,
            front_clip: 0.0,
            back_clip: 0.0,
            snap_rotation: 0.0,
            view_twist: 0.0,
        }
    }
}

impl Default for VPort {
    fn default() -> Self {
        Self::new(Self::ACTIVE)
    }
}

impl TableRecord for VPort {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_active() {
        assert_eq!(VPort::default().name, "*ACTIVE");
    }
}
