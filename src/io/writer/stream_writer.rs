//! Pair sink trait and helpers
//!
//! The section/table/entity writers never branch on the physical encoding;
//! only the two sink implementations know about line-based text vs.
//! fixed-width binary.

use crate::error::Result;
use crate::io::code_pair::{CodePair, CodePairValue};
use crate::types::{Handle, Vector3};

/// A sink for code/value pairs, text or binary.
pub trait PairSink {
    /// Write a pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a pair with a 16-bit integer value
    fn write_short(&mut self, code: i32, value: i16) -> Result<()>;

    /// Write a pair with a 32-bit integer value
    fn write_int(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a pair with a 64-bit integer value
    fn write_long(&mut self, code: i32, value: i64) -> Result<()>;

    /// Write a pair with a raw byte chunk value
    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()>;

    /// Flush the underlying writer
    fn flush(&mut self) -> Result<()>;
}

/// Convenience operations shared by every sink
pub trait PairSinkExt: PairSink {
    /// Write an already-constructed pair
    fn write_pair(&mut self, pair: &CodePair) -> Result<()> {
        match pair.value() {
            CodePairValue::Str(s) => self.write_string(pair.code(), s),
            CodePairValue::Double(v) => self.write_double(pair.code(), *v),
            CodePairValue::Short(v) => self.write_short(pair.code(), *v),
            CodePairValue::Int(v) => self.write_int(pair.code(), *v),
            CodePairValue::Long(v) => self.write_long(pair.code(), *v),
            CodePairValue::Binary(b) => self.write_binary(pair.code(), b),
        }
    }

    /// Write a 2D point as `x_code` and `x_code + 10`
    fn write_point2d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        Ok(())
    }

    /// Write a 3D point as `x_code`, `x_code + 10`, `x_code + 20`
    fn write_point3d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        self.write_double(x_code + 20, point.z)?;
        Ok(())
    }

    /// Write a handle in its hex wire form
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        self.write_string(code, &handle.to_hex())
    }

    /// Write the `(0, "SECTION")` / `(2, name)` opening
    fn write_section_start(&mut self, name: &str) -> Result<()> {
        self.write_string(0, "SECTION")?;
        self.write_string(2, name)?;
        Ok(())
    }

    /// Write the `(0, "ENDSEC")` sentinel
    fn write_section_end(&mut self) -> Result<()> {
        self.write_string(0, "ENDSEC")
    }

    /// Write the `(0, "EOF")` marker
    fn write_eof(&mut self) -> Result<()> {
        self.write_string(0, "EOF")
    }
}

impl<T: PairSink + ?Sized> PairSinkExt for T {}
