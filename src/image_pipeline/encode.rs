//! Frame encoding module
//!
//! Serializes tone-mapped frames; TIFF is the standard container.

mod writer;
mod standard_tiff_writer;

pub use writer::FrameWriter;
pub use standard_tiff_writer::StandardTiffWriter;
