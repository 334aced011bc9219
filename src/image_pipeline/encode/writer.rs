use std::io::Write;
use crate::image_pipeline::common::config::CaptureConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tonemap::types::EncodedFrame;

pub trait FrameWriter {
    /// File extension for written frames, without the dot.
    fn extension(&self) -> &str;

    fn write_frame(&self, frame: &EncodedFrame, output: &mut dyn Write, config: &CaptureConfig) -> Result<()>;
}
