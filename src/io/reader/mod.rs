//! DXF file reader

mod binary_reader;
mod section_reader;
mod text_reader;

pub use binary_reader::BinaryPairReader;
pub use text_reader::TextPairReader;

use section_reader::SectionReader;

use crate::document::DxfDocument;
use crate::error::{DxfError, Result};
use crate::io::buffer::CodePairBuffer;
use crate::io::code_pair::CodePair;
use crate::notification::NotificationType;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// A source of code/value pairs, text or binary.
pub trait PairSource {
    /// Read the next pair; `None` at a clean end of stream.
    fn read_pair(&mut self) -> Result<Option<CodePair>>;
}

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When `true`, a section that fails to parse is skipped and reported as
    /// an `Error` notification instead of aborting the whole load.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,
}

/// DXF file reader
pub struct DxfReader {
    source: Box<dyn PairSource>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any seekable reader
    pub fn from_reader<R: Read + Seek + 'static>(mut reader: R) -> Result<Self> {
        let is_binary = Self::is_binary(&mut reader)?;

        let source: Box<dyn PairSource> = if is_binary {
            reader.seek(SeekFrom::Start(binary_reader::SENTINEL_LEN))?;
            Box::new(BinaryPairReader::new(BufReader::new(reader)))
        } else {
            reader.seek(SeekFrom::Start(0))?;
            Box::new(TextPairReader::new(BufReader::new(reader)))
        };

        Ok(Self {
            source,
            config: DxfReaderConfiguration::default(),
        })
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Check whether a stream starts with the binary sentinel line
    fn is_binary<R: Read + Seek>(reader: &mut R) -> Result<bool> {
        const SENTINEL: &[u8] = b"AutoCAD Binary DXF";
        let mut buffer = [0u8; 18];
        let bytes_read = reader.read(&mut buffer)?;
        reader.seek(SeekFrom::Start(0))?;
        Ok(bytes_read == SENTINEL.len() && buffer == SENTINEL)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the stream into a document.
    pub fn read(mut self) -> Result<DxfDocument> {
        let mut buffer = CodePairBuffer::from_source(self.source.as_mut())?;
        let mut document = DxfDocument::new();
        let mut seen_sections: Vec<String> = Vec::new();
        let mut saw_eof = false;

        while buffer.items_remain() {
            let pair = buffer.peek()?;
            if pair.is_marker("SECTION") {
                buffer.advance();
                let name_pair = buffer.take()?;
                if name_pair.code() != 2 {
                    return Err(DxfError::structure(format!(
                        "expected section name pair after SECTION, got code {}",
                        name_pair.code()
                    )));
                }
                let name = name_pair.as_str().unwrap_or_default().to_string();
                self.read_section(&name, &mut buffer, &mut document, &mut seen_sections)?;
            } else if pair.is_eof() {
                buffer.advance();
                saw_eof = true;
                break;
            } else {
                return Err(DxfError::structure(format!(
                    "unexpected top-level pair {}",
                    pair
                )));
            }
        }

        if !saw_eof {
            return Err(DxfError::structure("stream ended without EOF marker"));
        }

        Ok(document)
    }

    fn read_section(
        &self,
        name: &str,
        buffer: &mut CodePairBuffer,
        document: &mut DxfDocument,
        seen_sections: &mut Vec<String>,
    ) -> Result<()> {
        let known = matches!(
            name,
            "HEADER" | "TABLES" | "BLOCKS" | "ENTITIES" | "THUMBNAILIMAGE"
        );

        if !known {
            document.notifications.notify(
                NotificationType::NotSupported,
                format!("skipped unrecognized section '{}'", name),
            );
            return skip_section(buffer);
        }

        if seen_sections.iter().any(|s| s == name) {
            return Err(DxfError::structure(format!(
                "duplicate {} section",
                name
            )));
        }
        seen_sections.push(name.to_string());

        let section_start = buffer.position();
        let result = {
            let mut section_reader = SectionReader::new(buffer);
            match name {
                "HEADER" => section_reader.read_header(document),
                "TABLES" => section_reader.read_tables(document),
                "BLOCKS" => section_reader.read_blocks(document),
                "ENTITIES" => section_reader.read_entities(document),
                "THUMBNAILIMAGE" => section_reader.read_thumbnail(document),
                _ => unreachable!(),
            }
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if self.config.failsafe => {
                document.notifications.notify(
                    NotificationType::Error,
                    format!("error reading {} section: {}", name, e),
                );
                // rewind to the section content, then skip it whole
                buffer.seek(section_start);
                skip_section(buffer)
            }
            Err(e) => Err(e),
        }
    }
}

/// Consume pairs up to and including the next `(0, "ENDSEC")`.
fn skip_section(buffer: &mut CodePairBuffer) -> Result<()> {
    while buffer.items_remain() {
        let pair = buffer.take()?;
        if pair.is_section_end() {
            return Ok(());
        }
    }
    Err(DxfError::structure("section not terminated by ENDSEC"))
}
