//! Text style table record

use super::TableRecord;

/// A text style table record
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Style name (code 2)
    pub name: String,
    /// Standard flags (code 70)
    pub flags: i16,
    /// Fixed text height; 0 means not fixed (code 40)
    pub fixed_height: f64,
    /// Width factor (code 41)
    pub width_factor: f64,
    /// Oblique angle in degrees (code 50)
    pub oblique_angle: f64,
    /// Text generation flags (code 71)
    pub generation_flags: i16,
    /// Last height used (code 42)
    pub last_height: f64,
    /// Primary font file name (code 3)
    pub font: String,
    /// Big font file name (code 4)
    pub big_font: String,
}

impl Style {
    /// Create a new style record
    pub fn new(name: impl Into<String>) -> Self {
        Style {
            name: name.into(),
            flags: 0,
            fixed_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            generation_flags: 0,
            last_height: 0.0,
            font: "txt".to_string(),
            big_font: String::new(),
        }
    }
}

impl TableRecord for Style {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = Style::new("STANDARD");
        assert_eq!(style.width_factor, 1.0);
        assert_eq!(style.font, "txt");
    }
}
