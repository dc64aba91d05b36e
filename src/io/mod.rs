//! DXF reading and writing

pub mod buffer;
pub mod code_pair;
pub mod group_code;
pub mod reader;
pub mod writer;

pub use buffer::CodePairBuffer;
pub use code_pair::{CodePair, CodePairValue};
pub use group_code::GroupCodeValueType;
pub use reader::{DxfReader, DxfReaderConfiguration, PairSource};
pub use writer::{DxfWriter, PairSink, PairSinkExt};
