//! Binary pair reader
//!
//! Binary DXF begins with the 22-byte sentinel preamble; thereafter a group
//! code is a single byte, or a little-endian i16 escaped by the reserved
//! lead byte 0xFF for codes that do not fit. Values are fixed-width
//! little-endian numbers, NUL-terminated strings, and length-prefixed raw
//! chunks. The escape threshold is code >= 255, applied identically by
//! [`crate::io::writer::BinaryPairWriter`].

use std::io::{BufReader, Read};

use super::PairSource;
use crate::error::{DxfError, Result};
use crate::io::code_pair::{CodePair, CodePairValue};
use crate::io::group_code::{self, GroupCodeValueType};

/// Lead byte announcing an escaped 16-bit group code
pub(crate) const CODE_ESCAPE: u8 = 0xFF;

/// Length of the binary sentinel preamble:
/// `"AutoCAD Binary DXF"` + `\r\n` + `0x1A` + `0x00`
pub(crate) const SENTINEL_LEN: u64 = 22;

/// Reads code/value pairs from a binary DXF stream
///
/// The caller must have consumed the sentinel preamble already; `offset`
/// starts there so error positions are absolute stream offsets.
pub struct BinaryPairReader<R: Read> {
    reader: BufReader<R>,
    offset: u64,
}

impl<R: Read> BinaryPairReader<R> {
    /// Create a binary pair reader positioned just past the sentinel
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            offset: SENTINEL_LEN,
        }
    }

    /// Read one byte; `None` at a clean end of stream.
    fn read_byte_or_eof(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte)? {
            0 => Ok(None),
            _ => {
                self.offset += 1;
                Ok(Some(byte[0]))
            }
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader.read_exact(buf).map_err(|_| {
            DxfError::malformed(self.offset, "unexpected end of stream mid-pair")
        })?;
        self.offset += buf.len() as u64;
        Ok(())
    }

    fn read_code(&mut self) -> Result<Option<i32>> {
        let lead = match self.read_byte_or_eof()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        if lead == CODE_ESCAPE {
            let mut buf = [0u8; 2];
            self.read_exact(&mut buf)?;
            Ok(Some(i16::from_le_bytes(buf) as i32))
        } else {
            Ok(Some(lead as i32))
        }
    }

    fn read_nul_string(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            match self.read_byte_or_eof()? {
                Some(0) => break,
                Some(byte) => bytes.push(byte),
                None => {
                    return Err(DxfError::malformed(
                        self.offset,
                        "unterminated string in binary stream",
                    ))
                }
            }
        }
        // Windows-1252 fallback keeps arbitrary producer bytes readable
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(e.as_bytes());
                decoded.into_owned()
            }
        })
    }

    fn read_value(&mut self, code: i32) -> Result<CodePairValue> {
        let kind = match group_code::value_type(code) {
            Ok(kind) => kind,
            Err(DxfError::UnknownCode { code, .. }) => {
                return Err(DxfError::UnknownCode {
                    code,
                    position: self.offset,
                });
            }
            Err(e) => return Err(e),
        };

        let value = match kind {
            GroupCodeValueType::Text => CodePairValue::Str(self.read_nul_string()?),
            GroupCodeValueType::Double => {
                let mut buf = [0u8; 8];
                self.read_exact(&mut buf)?;
                CodePairValue::Double(f64::from_le_bytes(buf))
            }
            GroupCodeValueType::Short => {
                let mut buf = [0u8; 2];
                self.read_exact(&mut buf)?;
                CodePairValue::Short(i16::from_le_bytes(buf))
            }
            GroupCodeValueType::Int => {
                let mut buf = [0u8; 4];
                self.read_exact(&mut buf)?;
                CodePairValue::Int(i32::from_le_bytes(buf))
            }
            GroupCodeValueType::Long => {
                let mut buf = [0u8; 8];
                self.read_exact(&mut buf)?;
                CodePairValue::Long(i64::from_le_bytes(buf))
            }
            GroupCodeValueType::Binary => {
                let length = match self.read_byte_or_eof()? {
                    Some(byte) => byte as usize,
                    None => {
                        return Err(DxfError::malformed(
                            self.offset,
                            "unexpected end of stream mid-pair",
                        ))
                    }
                };
                let mut data = vec![0u8; length];
                self.read_exact(&mut data)?;
                CodePairValue::Binary(data)
            }
        };
        Ok(value)
    }
}

impl<R: Read> PairSource for BinaryPairReader<R> {
    fn read_pair(&mut self) -> Result<Option<CodePair>> {
        let code = match self.read_code()? {
            Some(code) => code,
            None => return Ok(None),
        };
        let value = self.read_value(code)?;
        Ok(Some(CodePair::new(code, value)?))
    }
}
