//! Image source module
//!
//! The render-preview pane is only ever seen through these traits, so the
//! capture core runs against the host viewport or an in-process fake alike.

mod image_source;
mod test_pattern;
pub mod types;

pub use image_source::{ImageSource, PreviewPane};
pub use test_pattern::TestPatternSource;
pub use types::{Resolution, Sample, COLOR_PLANE};
