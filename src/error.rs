//! Error types for the dxfio library

use std::io;
use thiserror::Error;

/// Main error type for dxfio operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during stream operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Physical framing or encoding violation in the pair stream
    #[error("malformed stream at position {position}: {message}")]
    MalformedStream {
        /// Line number (text mode) or byte offset (binary mode)
        position: u64,
        /// What went wrong
        message: String,
    },

    /// Group code outside every range known to the tag-type table
    #[error("unknown group code {code} at position {position}")]
    UnknownCode {
        /// The offending code
        code: i32,
        /// Line number (text mode) or byte offset (binary mode)
        position: u64,
    },

    /// Section/table/sentinel pairs out of order
    #[error("structural error: {0}")]
    StructuralSequence(String),

    /// A pair was constructed with a value kind that does not match its code
    #[error("value kind does not match group code {code}")]
    MismatchedValueType {
        /// The code whose tag type disagrees with the supplied value
        code: i32,
    },

    /// Thumbnail payload did not match its declared byte length
    #[error("thumbnail length mismatch: declared {declared} bytes, got {actual}")]
    ThumbnailLengthMismatch {
        /// Byte count announced by the code 90 pair
        declared: usize,
        /// Byte count actually decoded from the code 310 chunks
        actual: usize,
    },
}

/// Result type alias for dxfio operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl DxfError {
    pub(crate) fn malformed(position: u64, message: impl Into<String>) -> Self {
        DxfError::MalformedStream {
            position,
            message: message.into(),
        }
    }

    pub(crate) fn structure(message: impl Into<String>) -> Self {
        DxfError::StructuralSequence(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnknownCode {
            code: 5000,
            position: 12,
        };
        assert_eq!(err.to_string(), "unknown group code 5000 at position 12");
    }

    #[test]
    fn test_thumbnail_mismatch_display() {
        let err = DxfError::ThumbnailLengthMismatch {
            declared: 3,
            actual: 2,
        };
        assert!(err.to_string().contains("declared 3"));
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
