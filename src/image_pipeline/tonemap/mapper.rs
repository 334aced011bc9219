use crate::image_pipeline::common::config::CaptureConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tonemap::types::{EncodedFrame, Image};

pub trait ToneMapper {
    fn tone_map(&self, image: &Image, config: &CaptureConfig) -> Result<EncodedFrame>;
}
