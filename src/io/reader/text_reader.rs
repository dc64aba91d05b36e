//! ASCII text pair reader
//!
//! Each code/value pair occupies two physical lines: the integer code line,
//! then the value line, whose syntax is dictated by the code's tag type.

use std::io::{BufReader, Read};

use encoding_rs::Encoding;

use super::PairSource;
use crate::error::{DxfError, Result};
use crate::io::code_pair::{CodePair, CodePairValue};
use crate::io::group_code::{self, GroupCodeValueType};

/// Reads code/value pairs from an ASCII DXF stream
pub struct TextPairReader<R: Read> {
    reader: BufReader<R>,
    line_number: u64,
    /// Fallback decoding for non-UTF8 bytes; Windows-1252 is the common
    /// DXF producer default.
    encoding: &'static Encoding,
}

impl<R: Read> TextPairReader<R> {
    /// Create a new text pair reader
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            encoding: encoding_rs::WINDOWS_1252,
        }
    }

    /// Set the fallback encoding for non-UTF8 value lines
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = encoding;
    }

    /// Read a single line, handling non-UTF8 bytes gracefully.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.line_number += 1;

        // Try UTF-8 first, then the fallback encoding
        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let (decoded, _, _) = self.encoding.decode(e.as_bytes());
                decoded.into_owned()
            }
        };

        Ok(Some(line.trim().to_string()))
    }

    fn parse_value(&self, code: i32, line: &str) -> Result<CodePair> {
        let kind = match group_code::value_type(code) {
            Ok(kind) => kind,
            Err(DxfError::UnknownCode { code, .. }) => {
                return Err(DxfError::UnknownCode {
                    code,
                    position: self.line_number,
                });
            }
            Err(e) => return Err(e),
        };

        let value = match kind {
            GroupCodeValueType::Text => CodePairValue::Str(line.to_string()),
            GroupCodeValueType::Double => CodePairValue::Double(line.parse::<f64>().map_err(
                |_| DxfError::malformed(self.line_number, format!("invalid double '{}'", line)),
            )?),
            GroupCodeValueType::Short => CodePairValue::Short(line.parse::<i16>().map_err(
                |_| DxfError::malformed(self.line_number, format!("invalid 16-bit integer '{}'", line)),
            )?),
            GroupCodeValueType::Int => CodePairValue::Int(line.parse::<i32>().map_err(
                |_| DxfError::malformed(self.line_number, format!("invalid 32-bit integer '{}'", line)),
            )?),
            GroupCodeValueType::Long => CodePairValue::Long(line.parse::<i64>().map_err(
                |_| DxfError::malformed(self.line_number, format!("invalid 64-bit integer '{}'", line)),
            )?),
            GroupCodeValueType::Binary => CodePairValue::Binary(self.parse_hex(line)?),
        };

        CodePair::new(code, value)
    }

    fn parse_hex(&self, line: &str) -> Result<Vec<u8>> {
        if line.len() % 2 != 0 {
            return Err(DxfError::malformed(
                self.line_number,
                "odd-length hex chunk",
            ));
        }
        let mut bytes = Vec::with_capacity(line.len() / 2);
        for i in (0..line.len()).step_by(2) {
            let byte = u8::from_str_radix(&line[i..i + 2], 16).map_err(|_| {
                DxfError::malformed(self.line_number, format!("invalid hex chunk '{}'", line))
            })?;
            bytes.push(byte);
        }
        Ok(bytes)
    }
}

impl<R: Read> PairSource for TextPairReader<R> {
    fn read_pair(&mut self) -> Result<Option<CodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line.parse::<i32>().map_err(|_| {
            DxfError::malformed(
                self.line_number,
                format!("invalid group code '{}'", code_line),
            )
        })?;

        let value_line = self.read_line()?.ok_or_else(|| {
            DxfError::malformed(
                self.line_number,
                format!("unexpected end of stream after code {}", code),
            )
        })?;

        Ok(Some(self.parse_value(code, &value_line)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_for(data: &str) -> TextPairReader<Cursor<Vec<u8>>> {
        TextPairReader::new(BufReader::new(Cursor::new(data.as_bytes().to_vec())))
    }

    #[test]
    fn test_read_string_pair() {
        let mut reader = reader_for("  0\r\nSECTION\r\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code(), 0);
        assert_eq!(pair.as_str(), Some("SECTION"));
    }

    #[test]
    fn test_read_typed_pairs() {
        let mut reader = reader_for(" 10\n1.5\n 62\n7\n 90\n42\n160\n99\n");
        assert_eq!(reader.read_pair().unwrap().unwrap().as_double(), Some(1.5));
        assert_eq!(reader.read_pair().unwrap().unwrap().as_short(), Some(7));
        assert_eq!(reader.read_pair().unwrap().unwrap().as_int(), Some(42));
        assert_eq!(reader.read_pair().unwrap().unwrap().as_long(), Some(99));
    }

    #[test]
    fn test_read_scientific_double() {
        let mut reader = reader_for(" 40\n7.0000000000000000E+000\n");
        assert_eq!(reader.read_pair().unwrap().unwrap().as_double(), Some(7.0));
    }

    #[test]
    fn test_read_hex_chunk() {
        let mut reader = reader_for("310\nDEADBEEF\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.as_binary(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
    }

    #[test]
    fn test_value_not_parsing_is_malformed() {
        let mut reader = reader_for(" 10\nnot-a-number\n");
        let err = reader.read_pair().unwrap_err();
        assert!(matches!(err, DxfError::MalformedStream { .. }));
    }

    #[test]
    fn test_eof_mid_pair_is_malformed() {
        let mut reader = reader_for("  0\n");
        let err = reader.read_pair().unwrap_err();
        assert!(matches!(err, DxfError::MalformedStream { .. }));
    }

    #[test]
    fn test_non_utf8_value_falls_back_to_windows_1252() {
        // 0xE9 is "é" in Windows-1252
        let mut data = b"  1\ncaf".to_vec();
        data.push(0xE9);
        data.push(b'\n');
        let mut reader = TextPairReader::new(BufReader::new(Cursor::new(data)));
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.as_str(), Some("café"));
    }

    #[test]
    fn test_unknown_code_carries_position() {
        let mut reader = reader_for("5000\nvalue\n");
        let err = reader.read_pair().unwrap_err();
        match err {
            DxfError::UnknownCode { code, position } => {
                assert_eq!(code, 5000);
                assert_eq!(position, 2);
            }
            other => panic!("expected UnknownCode, got {:?}", other),
        }
    }
}
