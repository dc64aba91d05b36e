//! Binary pair writer

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::stream_writer::PairSink;
use crate::error::Result;

/// The full binary DXF sentinel preamble
pub const BINARY_SENTINEL: &[u8] = b"AutoCAD Binary DXF\r\n\x1a\x00";

/// Lead byte announcing an escaped 16-bit group code.
/// Must match the reader's escape threshold: codes >= 255 are escaped.
const CODE_ESCAPE: u8 = 0xFF;

/// Writes code/value pairs in the binary DXF encoding
pub struct BinaryPairWriter<W: Write> {
    writer: W,
}

impl<W: Write> BinaryPairWriter<W> {
    /// Create a new binary pair writer, emitting the sentinel preamble
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_all(BINARY_SENTINEL)?;
        Ok(Self { writer })
    }

    fn write_code(&mut self, code: i32) -> Result<()> {
        if code >= CODE_ESCAPE as i32 {
            self.writer.write_u8(CODE_ESCAPE)?;
            self.writer.write_i16::<LittleEndian>(code as i16)?;
        } else {
            self.writer.write_u8(code as u8)?;
        }
        Ok(())
    }

    fn write_nul_string(&mut self, value: &str) -> Result<()> {
        self.writer.write_all(value.as_bytes())?;
        self.writer.write_u8(0)?;
        Ok(())
    }

    /// Get the inner writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PairSink for BinaryPairWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        self.write_nul_string(value)
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_code(code)?;
        self.writer.write_f64::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_short(&mut self, code: i32, value: i16) -> Result<()> {
        self.write_code(code)?;
        self.writer.write_i16::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_int(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_code(code)?;
        self.writer.write_i32::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_long(&mut self, code: i32, value: i64) -> Result<()> {
        self.write_code(code)?;
        self.writer.write_i64::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()> {
        self.write_code(code)?;
        self.writer.write_u8(data.len() as u8)?;
        self.writer.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_preamble() {
        let mut buf = Vec::new();
        let _ = BinaryPairWriter::new(&mut buf).unwrap();
        assert!(buf.starts_with(BINARY_SENTINEL));
        assert_eq!(buf.len(), 22);
    }

    #[test]
    fn test_write_string() {
        let mut buf = Vec::new();
        BinaryPairWriter::new(&mut buf)
            .unwrap()
            .write_string(0, "LINE")
            .unwrap();
        let body = &buf[BINARY_SENTINEL.len()..];
        assert_eq!(body, b"\x00LINE\x00");
    }

    #[test]
    fn test_write_double() {
        let mut buf = Vec::new();
        BinaryPairWriter::new(&mut buf)
            .unwrap()
            .write_double(10, 1.5)
            .unwrap();
        let body = &buf[BINARY_SENTINEL.len()..];
        assert_eq!(body[0], 10);
        assert_eq!(&body[1..9], &1.5f64.to_le_bytes());
    }

    #[test]
    fn test_code_escape_threshold() {
        let mut buf = Vec::new();
        {
            let mut writer = BinaryPairWriter::new(&mut buf).unwrap();
            writer.write_short(254, 1).unwrap();
            writer.write_short(280, 1).unwrap();
        }
        let body = &buf[BINARY_SENTINEL.len()..];
        // code 254 fits a single byte
        assert_eq!(body[0], 254);
        // code 280 is escaped: lead 0xFF then little-endian i16
        assert_eq!(body[3], 0xFF);
        assert_eq!(&body[4..6], &280i16.to_le_bytes());
    }
}
