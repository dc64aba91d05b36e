//! Unknown entity, the unsupported-type variant

use crate::io::code_pair::CodePair;

/// An entity of a type this codec does not understand
///
/// The raw pairs up to (but not including) the next `(0, ...)` pair are
/// preserved so the entity can be skipped on read and re-emitted verbatim
/// on write without a load ever failing because of one foreign record.
#[derive(Debug, Clone, PartialEq)]
pub struct Unknown {
    /// The `(0, <TYPE>)` tag the stream carried
    pub type_name: String,
    /// The raw trailing pairs, in stream order
    pub pairs: Vec<CodePair>,
}

impl Unknown {
    /// Create an unknown entity from its tag and raw pairs
    pub fn new(type_name: impl Into<String>, pairs: Vec<CodePair>) -> Self {
        Unknown {
            type_name: type_name.into(),
            pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_pairs() {
        let unknown = Unknown::new(
            "WEIRDTYPE",
            vec![CodePair::string(8, "0"), CodePair::double(10, 1.0)],
        );
        assert_eq!(unknown.type_name, "WEIRDTYPE");
        assert_eq!(unknown.pairs.len(), 2);
    }
}
