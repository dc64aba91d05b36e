//! Color representation for entities and layers

use std::fmt;

/// An AutoCAD Color Index value as carried by group code 62
///
/// The raw wire values 0 and 256 are the ByBlock and ByLayer sentinels;
/// 1-255 are palette indices. A negative raw value on a layer means the
/// layer is turned off, but carries the same palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (raw value 256)
    #[default]
    ByLayer,
    /// Color by block (raw value 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// Create a color from the raw group code 62 value
    pub fn from_raw(value: i16) -> Self {
        match value {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(value as u8),
            // negative = layer off, same index
            _ if value < 0 => Color::Index((-value).min(255) as u8),
            _ => Color::Index(7),
        }
    }

    /// The raw group code 62 value for this color
    pub fn raw_value(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
        }
    }

    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_raw() {
        assert_eq!(Color::from_raw(0), Color::ByBlock);
        assert_eq!(Color::from_raw(256), Color::ByLayer);
        assert_eq!(Color::from_raw(7), Color::Index(7));
    }

    #[test]
    fn test_raw_roundtrip() {
        for raw in [0i16, 1, 7, 255, 256] {
            assert_eq!(Color::from_raw(raw).raw_value(), raw);
        }
    }

    #[test]
    fn test_negative_raw_means_off() {
        assert_eq!(Color::from_raw(-7), Color::Index(7));
    }

    #[test]
    fn test_default_color() {
        assert_eq!(Color::default(), Color::ByLayer);
    }
}
