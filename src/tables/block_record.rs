//! Block record table entry

use super::TableRecord;

/// A block record table entry
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Block name (code 2)
    pub name: String,
    /// Standard flags (code 70)
    pub flags: i16,
}

impl BlockRecord {
    /// Create a new block record
    pub fn new(name: impl Into<String>) -> Self {
        BlockRecord {
            name: name.into(),
            flags: 0,
        }
    }
}

impl TableRecord for BlockRecord {
    fn name(&self) -> &str {
        &self.name
    }
}
