//! Polyline entity and its vertex sub-records

use super::EntityCommon;
use crate::types::Vector3;

/// One vertex sub-record of a polyline (wire type `VERTEX`)
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Location (code 10/20/30)
    pub location: Vector3,
    /// Starting width of the following segment (code 40)
    pub start_width: f64,
    /// Ending width of the following segment (code 41)
    pub end_width: f64,
    /// Bulge of the following segment (code 42); 0 means straight
    pub bulge: f64,
    /// Vertex flags (code 70)
    pub flags: i16,
}

impl Vertex {
    /// Create a vertex at a location
    pub fn new(location: Vector3) -> Self {
        Vertex {
            location,
            start_width: 0.0,
            end_width: 0.0,
            bulge: 0.0,
            flags: 0,
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(Vector3::ZERO)
    }
}

/// A polyline entity
///
/// On the wire this is a composite span: the `POLYLINE` header codes, then a
/// run of `VERTEX` entities, closed by a mandatory `SEQEND` marker. In
/// memory the vertices are simply owned by the polyline; the marker has no
/// representation of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags (code 70); bit 1 = closed
    pub flags: i16,
    /// Elevation, carried in code 30 (codes 10/20 are dummy zeros)
    pub elevation: f64,
    /// Default segment start width (code 40)
    pub default_start_width: f64,
    /// Default segment end width (code 41)
    pub default_end_width: f64,
    /// Extrusion normal (code 210/220/230)
    pub normal: Vector3,
    /// The owned vertex run
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    /// Create an empty polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            flags: 0,
            elevation: 0.0,
            default_start_width: 0.0,
            default_end_width: 0.0,
            normal: Vector3::UNIT_Z,
            vertices: Vec::new(),
        }
    }

    /// Create a polyline through the given points
    pub fn from_points(points: impl IntoIterator<Item = Vector3>) -> Self {
        Polyline {
            vertices: points.into_iter().map(Vertex::new).collect(),
            ..Self::new()
        }
    }

    /// Is the closed flag set?
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let poly = Polyline::from_points(vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
        ]);
        assert_eq!(poly.vertices.len(), 2);
        assert!(!poly.is_closed());
    }

    #[test]
    fn test_closed_flag() {
        let mut poly = Polyline::new();
        poly.flags = 1;
        assert!(poly.is_closed());
    }
}
