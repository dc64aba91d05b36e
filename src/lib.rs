//! # dxfio
//!
//! A pure Rust codec for DXF drawing interchange files.
//!
//! The format represents an entire drawing (header variables, named
//! tables, block definitions, and geometric entities) as a flat, ordered
//! stream of code/value pairs, serializable either as human-readable text
//! or as the compact binary encoding with identical logical content.
//!
//! ## Features
//!
//! - Read and write both the ASCII and the binary encoding, detected from
//!   the stream's first line
//! - Header, Tables, Blocks, Entities, and Thumbnail sections
//! - Lossless round-trip of well-formed input; unsupported sections and
//!   entity types are skipped (and recorded) without failing the load
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfio::{DxfDocument, Entity, Line, Vector3};
//!
//! // Read a DXF file
//! let doc = DxfDocument::load_file("sample.dxf")?;
//! for entity in &doc.entities {
//!     println!("{}", entity.type_name());
//! }
//!
//! // Build and write one
//! let mut doc = DxfDocument::new();
//! doc.add_entity(Entity::Line(Line::from_points(
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Vector3::new(10.0, 10.0, 0.0),
//! )));
//! doc.save_file("output.dxf", false)?;
//! # Ok::<(), dxfio::DxfError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod header;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::{DxfDocument, Thumbnail};
pub use error::{DxfError, Result};
pub use header::Header;
pub use types::{Color, Handle, Vector3};

// Re-export entity types
pub use entities::{
    Arc, Block, Circle, Dimension, Ellipse, Entity, Image, Line, Polyline, Solid, Text, Unknown,
    Vertex,
};

// Re-export table types
pub use tables::{AppId, BlockRecord, Layer, LineType, Style, Table, TableRecord, Ucs, VPort};

// Re-export I/O types
pub use io::{CodePair, CodePairValue, DxfReader, DxfWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = DxfDocument::new();
        assert!(doc.entities.is_empty());
    }
}
