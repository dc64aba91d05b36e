//! Block definition

use super::Entity;
use crate::types::Vector3;

/// A named entity container from the BLOCKS section
///
/// Bounded on the wire by `(0, "BLOCK")` and `(0, "ENDBLK")`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block name (code 2)
    pub name: String,
    /// Layer name (code 8)
    pub layer: String,
    /// Base point (code 10/20/30)
    pub base_point: Vector3,
    /// Block-type flags (code 70)
    pub flags: i16,
    /// The entities the block owns
    pub entities: Vec<Entity>,
}

impl Block {
    /// Create an empty block
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            layer: "0".to_string(),
            base_point: Vector3::ZERO,
            flags: 0,
            entities: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block() {
        let block = Block::new("DOOR");
        assert_eq!(block.name, "DOOR");
        assert_eq!(block.layer, "0");
        assert!(block.entities.is_empty());
    }
}
