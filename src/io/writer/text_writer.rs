//! ASCII text pair writer

use std::io::Write;

use super::stream_writer::PairSink;
use crate::error::Result;

/// Writes code/value pairs as ASCII text
pub struct TextPairWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextPairWriter<W> {
    /// Create a new text pair writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a group code right-aligned in a 3-character field
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{:>3}", code)?;
        Ok(())
    }

    /// Get the inner writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Format a double in fixed-width scientific notation.
///
/// 17 significant digits keep the text form round-trip exact for every
/// finite f64 while staying a constant width for a given sign.
pub fn format_double(value: f64) -> String {
    let formatted = format!("{:.16E}", value);
    // Rust renders the exponent bare ("1.5E0"); pad it to sign plus three digits
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!(
                "{}E{}{:03}",
                mantissa,
                if exponent < 0 { '-' } else { '+' },
                exponent.abs()
            )
        }
        None => formatted,
    }
}

impl<W: Write> PairSink for TextPairWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", format_double(value))?;
        Ok(())
    }

    fn write_short(&mut self, code: i32, value: i16) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_int(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_long(&mut self, code: i32, value: i64) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()> {
        self.write_code(code)?;
        for byte in data {
            write!(self.writer, "{:02X}", byte)?;
        }
        writeln!(self.writer)?;
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
    fn test_write_string() {
        let mut buf = Vec::new();
        TextPairWriter::new(&mut buf).write_string(0, "LINE").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "  0\nLINE\n");
    }

    #[test]
    fn test_code_right_alignment() {
        let mut buf = Vec::new();
        {
            let mut writer = TextPairWriter::new(&mut buf);
            writer.write_short(62, 7).unwrap();
            writer.write_string(100, "AcDbEntity").unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with(" 62\n"));
        assert!(output.contains("100\n"));
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(7.0), "7.0000000000000000E+000");
        assert_eq!(format_double(0.0), "0.0000000000000000E+000");
        assert_eq!(format_double(-1.5), "-1.5000000000000000E+000");
        assert_eq!(format_double(0.001), "1.0000000000000000E-003");
    }

    #[test]
    fn test_format_double_parses_back() {
        for value in [0.0, 1.0, -12.75, 1e-300, 123456.789, std::f64::consts::PI] {
            let text = format_double(value);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn test_write_binary_as_hex() {
        let mut buf = Vec::new();
        TextPairWriter::new(&mut buf)
            .write_binary(310, &[0xDE, 0xAD])
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "310\nDEAD\n");
    }
}
