//! Dimension entity

use super::EntityCommon;
use crate::types::Vector3;

/// A dimension annotation
///
/// Only the codes shared by every dimension subtype are modeled; the
/// subtype-specific definition points ride along in the flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// Common entity data
    pub common: EntityCommon,
    /// Definition point (code 10/20/30)
    pub definition_point: Vector3,
    /// Middle point of the dimension text (code 11/21/31)
    pub text_midpoint: Vector3,
    /// Dimension type flags (code 70)
    pub dimension_type: i16,
    /// Explicit text override (code 1); empty means the measured value
    pub text: String,
    /// Dimension style name (code 3)
    pub style_name: String,
}

impl Dimension {
    /// Create an empty dimension
    pub fn new() -> Self {
        Dimension {
            common: EntityCommon::new(),
            definition_point: Vector3::ZERO,
            text_midpoint: Vector3::ZERO,
            dimension_type: 0,
            text: String::new(),
            style_name: "STANDARD".to_string(),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let dim = Dimension::new();
        assert_eq!(dim.style_name, "STANDARD");
        assert!(dim.text.is_empty());
    }
}
