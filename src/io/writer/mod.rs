//! DXF file writer

mod binary_writer;
mod section_writer;
mod stream_writer;
mod text_writer;

pub use binary_writer::{BinaryPairWriter, BINARY_SENTINEL};
pub use section_writer::SectionWriter;
pub use stream_writer::{PairSink, PairSinkExt};
pub use text_writer::{format_double, TextPairWriter};

use crate::document::DxfDocument;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// DXF file writer
///
/// Emits the document's sections in canonical order (Header, Tables,
/// Blocks, Entities, Thumbnail), skipping the ones with no content, then
/// the EOF marker.
pub struct DxfWriter<'a> {
    document: &'a DxfDocument,
    /// Whether to write the binary encoding
    pub binary: bool,
}

impl<'a> DxfWriter<'a> {
    /// Create a new writer for ASCII output
    pub fn new(document: &'a DxfDocument) -> Self {
        Self {
            document,
            binary: false,
        }
    }

    /// Create a new writer for binary output
    pub fn new_binary(document: &'a DxfDocument) -> Self {
        Self {
            document,
            binary: true,
        }
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        if self.binary {
            let mut sink = BinaryPairWriter::new(writer)?;
            self.write_sections(&mut sink)?;
            sink.flush()
        } else {
            let mut sink = TextPairWriter::new(writer);
            self.write_sections(&mut sink)?;
            sink.flush()
        }
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    fn write_sections<W: PairSink>(&self, sink: &mut W) -> Result<()> {
        let document = self.document;
        let mut section_writer = SectionWriter::new(sink);

        if !document.header.is_empty() {
            section_writer.write_header(document)?;
        }

        let any_table = !document.layers.is_empty()
            || !document.view_ports.is_empty()
            || !document.styles.is_empty()
            || !document.app_ids.is_empty()
            || !document.coordinate_systems.is_empty()
            || !document.block_records.is_empty()
            || !document.line_types.is_empty();
        if any_table {
            section_writer.write_tables(document)?;
        }

        if !document.blocks.is_empty() {
            section_writer.write_blocks(document)?;
        }

        if !document.entities.is_empty() {
            section_writer.write_entities(document)?;
        }

        if let Some(thumbnail) = &document.thumbnail {
            section_writer.write_thumbnail(&thumbnail.data)?;
        }

        sink.write_eof()
    }
}
