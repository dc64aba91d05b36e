//! Layer table record

use bitflags::bitflags;

use super::TableRecord;
use crate::types::Color;

bitflags! {
    /// Layer state flags carried by group code 70
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i16 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen in newly created viewports
        const FROZEN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
    }
}

/// A layer table record
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name (code 2)
    pub name: String,
    /// Layer state flags (code 70)
    pub flags: LayerFlags,
    /// Layer color (code 62)
    pub color: Color,
    /// Linetype name (code 6)
    pub linetype: String,
    /// Layer visibility; carried as a negated code 62 value on the wire
    pub is_off: bool,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: LayerFlags::empty(),
            color: Color::WHITE,
            linetype: "CONTINUOUS".to_string(),
            is_off: false,
        }
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }

    /// The raw code 62 value: the color index, negated when the layer is off
    pub fn raw_color(&self) -> i16 {
        let raw = self.color.raw_value();
        if self.is_off && raw > 0 {
            -raw
        } else {
            raw
        }
    }

    /// Set color and visibility from the raw code 62 value
    pub fn set_raw_color(&mut self, value: i16) {
        self.is_off = value < 0;
        self.color = Color::from_raw(value);
    }
}

impl TableRecord for Layer {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::new("0");
        assert_eq!(layer.color, Color::WHITE);
        assert_eq!(layer.linetype, "CONTINUOUS");
        assert!(!layer.is_frozen());
        assert!(!layer.is_locked());
    }

    #[test]
    fn test_flags_from_raw() {
        let mut layer = Layer::new("L");
        layer.flags = LayerFlags::from_bits_truncate(5);
        assert!(layer.is_frozen());
        assert!(layer.is_locked());
    }

    #[test]
    fn test_off_layer_raw_color() {
        let mut layer = Layer::new("L");
        layer.set_raw_color(-7);
        assert!(layer.is_off);
        assert_eq!(layer.color, Color::Index(7));
        assert_eq!(layer.raw_color(), -7);
    }
}
