//! Property tests for the pair codec.

use std::io::{BufReader, Cursor};

use proptest::prelude::*;

use dxfio::io::reader::{BinaryPairReader, PairSource, TextPairReader};
use dxfio::io::writer::{format_double, BinaryPairWriter, PairSink, TextPairWriter};

proptest! {
    /// The fixed-width scientific text form is round-trip exact for every
    /// finite double.
    #[test]
    fn double_text_form_roundtrips(value in proptest::num::f64::ANY) {
        prop_assume!(value.is_finite());
        let text = format_double(value);
        prop_assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    /// A pair written as text reads back identically.
    #[test]
    fn text_pair_roundtrips(value in proptest::num::f64::ANY, code in 10i32..=59) {
        prop_assume!(value.is_finite());
        let mut buf = Vec::new();
        TextPairWriter::new(&mut buf).write_double(code, value).unwrap();

        let mut reader = TextPairReader::new(BufReader::new(Cursor::new(buf)));
        let pair = reader.read_pair().unwrap().unwrap();
        prop_assert_eq!(pair.code(), code);
        prop_assert_eq!(pair.as_double(), Some(value));
    }

    /// A pair written as binary reads back identically, across the code
    /// escape threshold.
    #[test]
    fn binary_short_pair_roundtrips(value in any::<i16>(), code in prop_oneof![60i32..=79, 270i32..=289]) {
        let mut buf = Vec::new();
        BinaryPairWriter::new(&mut buf).unwrap().write_short(code, value).unwrap();

        // the reader expects the stream after the 22-byte sentinel
        let body = buf[22..].to_vec();
        let mut reader = BinaryPairReader::new(BufReader::new(Cursor::new(body)));
        let pair = reader.read_pair().unwrap().unwrap();
        prop_assert_eq!(pair.code(), code);
        prop_assert_eq!(pair.as_short(), Some(value));
    }

    /// Strings survive the binary NUL-terminated form.
    #[test]
    fn binary_string_pair_roundtrips(value in "[ -~]{0,40}") {
        let mut buf = Vec::new();
        BinaryPairWriter::new(&mut buf).unwrap().write_string(1, &value).unwrap();

        let body = buf[22..].to_vec();
        let mut reader = BinaryPairReader::new(BufReader::new(Cursor::new(body)));
        let pair = reader.read_pair().unwrap().unwrap();
        prop_assert_eq!(pair.as_str(), Some(value.as_str()));
    }
}
