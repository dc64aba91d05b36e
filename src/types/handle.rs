//! Handle type for CAD objects
//!
//! Handles are opaque identifiers carried as hex strings on the wire.

use std::fmt;

/// A unique identifier for records in a drawing
///
/// Handle 0 is reserved and means "no handle assigned"; the writer omits
/// the handle pair entirely for such records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null handle (0), meaning "absent"
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Parse a handle from its hex wire form
    pub fn from_hex(s: &str) -> Option<Self> {
        u64::from_str_radix(s.trim(), 16).ok().map(Handle)
    }

    /// The hex wire form of this handle
    pub fn to_hex(&self) -> String {
        format!("{:X}", self.0)
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_hex_roundtrip() {
        let handle = Handle::new(0xABCD);
        assert_eq!(handle.to_hex(), "ABCD");
        assert_eq!(Handle::from_hex("ABCD"), Some(handle));
        assert_eq!(Handle::from_hex("abcd"), Some(handle));
    }

    #[test]
    fn test_null_handle() {
        assert!(Handle::NULL.is_null());
        assert!(!Handle::new(42).is_null());
        assert_eq!(Handle::default(), Handle::NULL);
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(Handle::from_hex("zz"), None);
    }
}
