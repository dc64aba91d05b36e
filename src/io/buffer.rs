//! Cursor over a materialized pair sequence
//!
//! Every section, table, and entity parser consumes pairs through this
//! cursor, so "swallow up to but not including the next 0-coded pair" is one
//! reusable pattern instead of a per-parser reimplementation. The underlying
//! slice is never mutated after construction; the cursor is just an index.

use crate::error::{DxfError, Result};
use crate::io::code_pair::{CodePair, COMMENT_CODE};
use crate::io::reader::PairSource;

/// A peek/advance cursor over an immutable pair arena
#[derive(Debug)]
pub struct CodePairBuffer {
    pairs: Vec<CodePair>,
    position: usize,
}

impl CodePairBuffer {
    /// Materialize all pairs from a source, filtering comment pairs so no
    /// parser above the cursor ever observes them.
    pub fn from_source(source: &mut dyn PairSource) -> Result<Self> {
        let mut pairs = Vec::new();
        while let Some(pair) = source.read_pair()? {
            if pair.code() == COMMENT_CODE {
                continue;
            }
            pairs.push(pair);
        }
        Ok(CodePairBuffer { pairs, position: 0 })
    }

    /// Build a buffer directly from pairs (used by tests)
    pub fn from_pairs(pairs: Vec<CodePair>) -> Self {
        CodePairBuffer { pairs, position: 0 }
    }

    /// Look at the current pair without consuming it.
    ///
    /// Fails with a structural error when the buffer is exhausted; parsers
    /// only peek where the format guarantees more pairs.
    pub fn peek(&self) -> Result<&CodePair> {
        self.pairs
            .get(self.position)
            .ok_or_else(|| DxfError::structure("unexpected end of pair stream"))
    }

    /// Consume the current pair.
    pub fn advance(&mut self) {
        if self.position < self.pairs.len() {
            self.position += 1;
        }
    }

    /// Are there pairs left to consume?
    pub fn items_remain(&self) -> bool {
        self.position < self.pairs.len()
    }

    /// The current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewind or fast-forward the cursor. The arena is immutable, so a
    /// saved position stays valid for the buffer's lifetime.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.pairs.len());
    }

    /// Peek, clone, and advance in one step.
    pub fn take(&mut self) -> Result<CodePair> {
        let pair = self.peek()?.clone();
        self.advance();
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_advance() {
        let mut buffer = CodePairBuffer::from_pairs(vec![
            CodePair::string(0, "SECTION"),
            CodePair::string(2, "HEADER"),
        ]);

        assert!(buffer.items_remain());
        assert_eq!(buffer.peek().unwrap().as_str(), Some("SECTION"));
        // peek does not consume
        assert_eq!(buffer.peek().unwrap().as_str(), Some("SECTION"));

        buffer.advance();
        assert_eq!(buffer.peek().unwrap().as_str(), Some("HEADER"));

        buffer.advance();
        assert!(!buffer.items_remain());
        assert!(buffer.peek().is_err());
    }

    #[test]
    fn test_advance_past_end_is_harmless() {
        let mut buffer = CodePairBuffer::from_pairs(vec![CodePair::string(0, "EOF")]);
        buffer.advance();
        buffer.advance();
        assert!(!buffer.items_remain());
    }
}
