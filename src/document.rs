//! The in-memory drawing document

use std::io::{Read, Seek, Write};
use std::path::Path;

use crate::entities::{Block, Entity};
use crate::error::Result;
use crate::header::Header;
use crate::io::reader::DxfReader;
use crate::io::writer::DxfWriter;
use crate::notification::NotificationCollection;
use crate::tables::{AppId, BlockRecord, Layer, LineType, Style, Table, Ucs, VPort};

/// An embedded preview image from the THUMBNAILIMAGE section
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// The raw image bytes
    pub data: Vec<u8>,
}

/// One drawing: header settings, named tables, block definitions, entities,
/// and an optional embedded thumbnail.
///
/// A document is built fresh by every load and read immutably by every
/// save; nothing is shared between separate load/save calls.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    /// Header section variables
    pub header: Header,
    /// Layer table
    pub layers: Table<Layer>,
    /// Viewport table
    pub view_ports: Table<VPort>,
    /// Text style table
    pub styles: Table<Style>,
    /// Application id table
    pub app_ids: Table<AppId>,
    /// User coordinate system table
    pub coordinate_systems: Table<Ucs>,
    /// Block record table
    pub block_records: Table<BlockRecord>,
    /// Linetype table
    pub line_types: Table<LineType>,
    /// Block definitions
    pub blocks: Vec<Block>,
    /// Entities in model/paper space
    pub entities: Vec<Entity>,
    /// Embedded preview image
    pub thumbnail: Option<Thumbnail>,
    /// Non-fatal issues recorded during the load
    pub notifications: NotificationCollection,
}

impl DxfDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the document
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Load a document from any seekable reader, detecting the encoding
    /// from the stream's first line.
    pub fn load<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        DxfReader::from_reader(reader)?.read()
    }

    /// Load a document from a file path
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DxfReader::from_file(path)?.read()
    }

    /// Save the document as ASCII text
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        DxfWriter::new(self).write_to_writer(writer)
    }

    /// Save the document in the binary encoding
    pub fn save_binary<W: Write>(&self, writer: W) -> Result<()> {
        DxfWriter::new_binary(self).write_to_writer(writer)
    }

    /// Save the document to a file path
    pub fn save_file<P: AsRef<Path>>(&self, path: P, binary: bool) -> Result<()> {
        let file = std::fs::File::create(path)?;
        if binary {
            self.save_binary(file)
        } else {
            self.save(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Line;

    #[test]
    fn test_new_document_is_empty() {
        let doc = DxfDocument::new();
        assert!(doc.header.is_empty());
        assert!(doc.layers.is_empty());
        assert!(doc.entities.is_empty());
        assert!(doc.blocks.is_empty());
        assert!(doc.thumbnail.is_none());
        assert!(doc.notifications.is_empty());
    }

    #[test]
    fn test_add_entity() {
        let mut doc = DxfDocument::new();
        doc.add_entity(Entity::Line(Line::new()));
        assert_eq!(doc.entities.len(), 1);
    }
}
