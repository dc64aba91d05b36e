//! Header section variables
//!
//! The header is an ordered name → value-pairs map over a whitelist of known
//! variables. A variable's value is one or more pairs (point-valued
//! variables like `$EXTMIN` span three). Map insertion order is the
//! canonical write order.

use indexmap::IndexMap;

use crate::io::code_pair::CodePair;
use crate::types::{Handle, Vector3};

/// Header variable names this codec understands; anything else read from a
/// stream is consumed and dropped with a notification.
pub const KNOWN_VARIABLES: &[&str] = &[
    "$ACADVER",
    "$HANDSEED",
    "$INSBASE",
    "$EXTMIN",
    "$EXTMAX",
    "$CLAYER",
    "$CELTYPE",
    "$CECOLOR",
    "$LUPREC",
    "$INSUNITS",
    "$MEASUREMENT",
];

/// Drawing settings from the HEADER section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    values: IndexMap<String, Vec<CodePair>>,
}

impl Header {
    /// Create an empty header
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this a variable name the codec understands?
    pub fn is_known_variable(name: &str) -> bool {
        KNOWN_VARIABLES.contains(&name)
    }

    /// Store a variable's raw value pairs, replacing any previous value.
    pub fn set_raw(&mut self, name: impl Into<String>, pairs: Vec<CodePair>) {
        self.values.insert(name.into(), pairs);
    }

    /// Get a variable's raw value pairs.
    pub fn get_raw(&self, name: &str) -> Option<&[CodePair]> {
        self.values.get(name).map(|pairs| pairs.as_slice())
    }

    /// Iterate over all stored variables in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &[CodePair])> {
        self.values
            .iter()
            .map(|(name, pairs)| (name.as_str(), pairs.as_slice()))
    }

    /// Does the header hold any variables?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn first_str(&self, name: &str) -> Option<&str> {
        self.get_raw(name)?.first()?.as_str()
    }

    fn first_short(&self, name: &str) -> Option<i16> {
        self.get_raw(name)?.first()?.as_short()
    }

    fn point(&self, name: &str) -> Option<Vector3> {
        let pairs = self.get_raw(name)?;
        let mut point = Vector3::ZERO;
        for pair in pairs {
            match (pair.code(), pair.as_double()) {
                (10, Some(v)) => point.x = v,
                (20, Some(v)) => point.y = v,
                (30, Some(v)) => point.z = v,
                _ => {}
            }
        }
        Some(point)
    }

    fn set_point(&mut self, name: &str, point: Vector3) {
        self.set_raw(
            name,
            vec![
                CodePair::double(10, point.x),
                CodePair::double(20, point.y),
                CodePair::double(30, point.z),
            ],
        );
    }

    /// Drawing format version string (`$ACADVER`)
    pub fn version(&self) -> Option<&str> {
        self.first_str("$ACADVER")
    }

    /// Set the drawing format version string
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.set_raw("$ACADVER", vec![CodePair::string(1, version)]);
    }

    /// Current layer name (`$CLAYER`), defaulting to layer "0"
    pub fn current_layer(&self) -> &str {
        self.first_str("$CLAYER").unwrap_or("0")
    }

    /// Set the current layer name
    pub fn set_current_layer(&mut self, layer: impl Into<String>) {
        self.set_raw("$CLAYER", vec![CodePair::string(8, layer)]);
    }

    /// Drawing insertion units (`$INSUNITS`), 0 = unitless
    pub fn insertion_units(&self) -> i16 {
        self.first_short("$INSUNITS").unwrap_or(0)
    }

    /// Set the drawing insertion units
    pub fn set_insertion_units(&mut self, units: i16) {
        self.set_raw("$INSUNITS", vec![CodePair::short(70, units)]);
    }

    /// Linear unit display precision (`$LUPREC`)
    pub fn unit_precision(&self) -> i16 {
        self.first_short("$LUPREC").unwrap_or(4)
    }

    /// Set the linear unit display precision
    pub fn set_unit_precision(&mut self, precision: i16) {
        self.set_raw("$LUPREC", vec![CodePair::short(70, precision)]);
    }

    /// Minimum drawing extents (`$EXTMIN`)
    pub fn extents_min(&self) -> Vector3 {
        self.point("$EXTMIN").unwrap_or(Vector3::ZERO)
    }

    /// Set the minimum drawing extents
    pub fn set_extents_min(&mut self, point: Vector3) {
        self.set_point("$EXTMIN", point);
    }

    /// Maximum drawing extents (`$EXTMAX`)
    pub fn extents_max(&self) -> Vector3 {
        self.point("$EXTMAX").unwrap_or(Vector3::ZERO)
    }

    /// Set the maximum drawing extents
    pub fn set_extents_max(&mut self, point: Vector3) {
        self.set_point("$EXTMAX", point);
    }

    /// Block insertion base point (`$INSBASE`)
    pub fn insertion_base(&self) -> Vector3 {
        self.point("$INSBASE").unwrap_or(Vector3::ZERO)
    }

    /// Set the block insertion base point
    pub fn set_insertion_base(&mut self, point: Vector3) {
        self.set_point("$INSBASE", point);
    }

    /// Next available handle value (`$HANDSEED`)
    pub fn handle_seed(&self) -> Option<Handle> {
        self.get_raw("$HANDSEED")?.first()?.as_handle()
    }

    /// Set the next available handle value
    pub fn set_handle_seed(&mut self, handle: Handle) {
        self.set_raw("$HANDSEED", vec![CodePair::string(5, handle.to_hex())]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors_roundtrip() {
        let mut header = Header::new();
        header.set_version("AC1009");
        header.set_current_layer("Walls");
        header.set_insertion_units(4);
        header.set_unit_precision(2);
        header.set_extents_min(Vector3::new(-1.0, -2.0, 0.0));

        assert_eq!(header.version(), Some("AC1009"));
        assert_eq!(header.current_layer(), "Walls");
        assert_eq!(header.insertion_units(), 4);
        assert_eq!(header.unit_precision(), 2);
        assert_eq!(header.extents_min(), Vector3::new(-1.0, -2.0, 0.0));
    }

    #[test]
    fn test_defaults_when_absent() {
        let header = Header::new();
        assert_eq!(header.current_layer(), "0");
        assert_eq!(header.insertion_units(), 0);
        assert_eq!(header.unit_precision(), 4);
        assert_eq!(header.version(), None);
    }

    #[test]
    fn test_known_variable_whitelist() {
        assert!(Header::is_known_variable("$ACADVER"));
        assert!(!Header::is_known_variable("$SPLINESEGS"));
    }

    #[test]
    fn test_set_replaces() {
        let mut header = Header::new();
        header.set_insertion_units(1);
        header.set_insertion_units(6);
        assert_eq!(header.insertion_units(), 6);
        assert_eq!(header.variables().count(), 1);
    }
}
