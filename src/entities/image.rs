//! Raster image reference entity

use super::EntityCommon;
use crate::types::{Handle, Vector3};

/// A raster image placed in the drawing
///
/// The pixel data itself lives outside the entity; code 340 references the
/// image definition record by handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (code 10/20/30)
    pub insertion_point: Vector3,
    /// U-vector of a single pixel (code 11/21/31)
    pub u_vector: Vector3,
    /// V-vector of a single pixel (code 12/22/32)
    pub v_vector: Vector3,
    /// Image size in pixels (code 13/23)
    pub size: Vector3,
    /// Handle of the image definition record (code 340)
    pub image_definition: Handle,
    /// Display flags (code 70)
    pub display_flags: i16,
    /// Clipping state (code 280)
    pub clipping: bool,
    /// Brightness 0-100 (code 281)
    pub brightness: i16,
    /// Contrast 0-100 (code 282)
    pub contrast: i16,
    /// Fade 0-100 (code 283)
    pub fade: i16,
}

impl Image {
    /// Create an image reference with display defaults
    pub fn new() -> Self {
        Image {
            common: EntityCommon::new(),
            insertion_point: Vector3::ZERO,
            u_vector: Vector3::new(1.0, 0.0, 0.0),
            v_vector: Vector3::new(0.0, 1.0, 0.0),
            size: Vector3::ZERO,
            image_definition: Handle::NULL,
            display_flags: 1,
            clipping: false,
            brightness: 50,
            contrast: 50,
            fade: 0,
        }
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}
