//! Named table types from the TABLES section

use indexmap::IndexMap;

pub mod appid;
pub mod block_record;
pub mod layer;
pub mod linetype;
pub mod style;
pub mod ucs;
pub mod vport;

pub use appid::AppId;
pub use block_record::BlockRecord;
pub use layer::{Layer, LayerFlags};
pub use linetype::LineType;
pub use style::Style;
pub use ucs::Ucs;
pub use vport::VPort;

/// Base trait for all table records
pub trait TableRecord {
    /// The record's name key
    fn name(&self) -> &str;
}

/// A named collection of records of one kind
///
/// Records are keyed by name (case-insensitive) in insertion order, which is
/// also the canonical write order. Inserting a duplicate name replaces the
/// existing record: last one wins, matching typical producer tolerance.
#[derive(Debug, Clone)]
pub struct Table<T: TableRecord> {
    records: IndexMap<String, T>,
}

impl<T: TableRecord> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            records: IndexMap::new(),
        }
    }

    /// Insert a record; returns the replaced record if the name was taken.
    pub fn insert(&mut self, record: T) -> Option<T> {
        self.records.insert(record.name().to_uppercase(), record)
    }

    /// Get a record by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.records.get(&name.to_uppercase())
    }

    /// Check if a record exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&name.to_uppercase())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

impl<T: TableRecord> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = Table::new();
        assert!(table.insert(Layer::new("Walls")).is_none());
        assert!(table.contains("walls"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let mut table = Table::new();
        let mut first = Layer::new("Walls");
        first.color = crate::types::Color::RED;
        table.insert(first);

        let mut second = Layer::new("WALLS");
        second.color = crate::types::Color::BLUE;
        let replaced = table.insert(second);

        assert!(replaced.is_some());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("walls").unwrap().color, crate::types::Color::BLUE);
    }
}
