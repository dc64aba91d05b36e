//! Entity types
//!
//! Entities form a closed sum type: the wire dispatch is a single `match`
//! on the `(0, <TYPE>)` tag, and the unsupported case is a first-class
//! [`Unknown`] variant rather than a special null object.

use crate::types::{Color, Handle};

pub mod arc;
pub mod block;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod image;
pub mod line;
pub mod polyline;
pub mod solid;
pub mod text;
pub mod unknown;

pub use arc::Arc;
pub use block::Block;
pub use circle::Circle;
pub use dimension::Dimension;
pub use ellipse::Ellipse;
pub use image::Image;
pub use line::Line;
pub use polyline::{Polyline, Vertex};
pub use solid::Solid;
pub use text::Text;
pub use unknown::Unknown;

/// Linetype name meaning "inherit from the layer"
pub const LINETYPE_BY_LAYER: &str = "BYLAYER";

/// The default layer every entity lands on when the stream says nothing
pub const DEFAULT_LAYER: &str = "0";

/// Common attributes shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Record handle; `Handle::NULL` when the stream carried none
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Linetype name
    pub linetype: String,
    /// Linetype scale
    pub linetype_scale: f64,
    /// Visibility flag (wire code 60: 1 = invisible)
    pub visible: bool,
    /// Paper-space flag (wire code 67)
    pub paper_space: bool,
    /// Color (wire code 62)
    pub color: Color,
}

impl EntityCommon {
    /// Common attributes with their documented defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: DEFAULT_LAYER.to_string(),
            linetype: LINETYPE_BY_LAYER.to_string(),
            linetype_scale: 1.0,
            visible: true,
            paper_space: false,
            color: Color::ByLayer,
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// One drawable record from the ENTITIES or BLOCKS section
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    Text(Text),
    Polyline(Polyline),
    Solid(Solid),
    Dimension(Dimension),
    Image(Image),
    /// An entity type this codec does not understand, preserved raw
    Unknown(Unknown),
}

impl Entity {
    /// The `(0, <TYPE>)` dispatch tag for this entity
    pub fn type_name(&self) -> &str {
        match self {
            Entity::Line(_) => "LINE",
            Entity::Circle(_) => "CIRCLE",
            Entity::Arc(_) => "ARC",
            Entity::Ellipse(_) => "ELLIPSE",
            Entity::Text(_) => "TEXT",
            Entity::Polyline(_) => "POLYLINE",
            Entity::Solid(_) => "SOLID",
            Entity::Dimension(_) => "DIMENSION",
            Entity::Image(_) => "IMAGE",
            Entity::Unknown(u) => &u.type_name,
        }
    }

    /// The shared attributes, when the variant carries them
    /// (`Unknown` preserves its pairs raw and has none)
    pub fn common(&self) -> Option<&EntityCommon> {
        match self {
            Entity::Line(e) => Some(&e.common),
            Entity::Circle(e) => Some(&e.common),
            Entity::Arc(e) => Some(&e.common),
            Entity::Ellipse(e) => Some(&e.common),
            Entity::Text(e) => Some(&e.common),
            Entity::Polyline(e) => Some(&e.common),
            Entity::Solid(e) => Some(&e.common),
            Entity::Dimension(e) => Some(&e.common),
            Entity::Image(e) => Some(&e.common),
            Entity::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_defaults() {
        let common = EntityCommon::new();
        assert_eq!(common.layer, "0");
        assert_eq!(common.linetype, "BYLAYER");
        assert_eq!(common.linetype_scale, 1.0);
        assert!(common.visible);
        assert!(!common.paper_space);
        assert_eq!(common.color, Color::ByLayer);
        assert!(common.handle.is_null());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Entity::Line(Line::new()).type_name(), "LINE");
        assert_eq!(Entity::Circle(Circle::new()).type_name(), "CIRCLE");
    }
}
