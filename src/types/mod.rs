//! Value types shared by the document model and the codec

pub mod color;
pub mod handle;
pub mod vector;

pub use color::Color;
pub use handle::Handle;
pub use vector::Vector3;
