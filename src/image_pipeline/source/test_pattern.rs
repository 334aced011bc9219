use tracing::trace;

use crate::image_pipeline::common::error::{CaptureError, Result};
use crate::image_pipeline::source::image_source::{ImageSource, PreviewPane};
use crate::image_pipeline::source::types::{Resolution, Sample};

/// In-process stand-in for a preview pane.
///
/// Renders a linear-light gradient: red ramps left to right, green ramps bottom
/// to top, blue cycles with the current frame. `exposure` scales the whole
/// image, so values above 1.0 exercise the HDR path.
#[derive(Debug, Clone)]
pub struct TestPatternSource {
    resolution: Resolution,
    exposure: f32,
    frame: u32,
    rendering: bool,
}

/// Frames per full blue cycle.
const BLUE_PERIOD: u32 = 48;

impl TestPatternSource {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            exposure: 1.0,
            frame: 1,
            rendering: false,
        }
    }

    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    fn ramp(pos: usize, len: usize) -> f32 {
        if len <= 1 {
            0.0
        } else {
            pos as f32 / (len - 1) as f32
        }
    }
}

impl ImageSource for TestPatternSource {
    fn image_resolution(&self) -> Result<Resolution> {
        Ok(self.resolution)
    }

    fn pixel(&self, _plane: &str, x: usize, y: usize) -> Result<Sample> {
        let Resolution { width, height } = self.resolution;
        if x >= width || y >= height {
            return Err(CaptureError::SourceUnavailable(format!(
                "pixel ({}, {}) outside {}x{} image",
                x, y, width, height
            )));
        }

        let phase = (self.frame % BLUE_PERIOD) as f32 / BLUE_PERIOD as f32;
        Ok(Sample::rgba(
            Self::ramp(x, width) * self.exposure,
            Self::ramp(y, height) * self.exposure,
            phase * self.exposure,
            1.0,
        ))
    }
}

impl PreviewPane for TestPatternSource {
    fn set_frame(&mut self, frame: u32) -> Result<()> {
        trace!(frame, "test pattern frame set");
        self.frame = frame;
        Ok(())
    }

    fn resume_render(&mut self) -> Result<()> {
        self.rendering = true;
        Ok(())
    }

    fn pause_render(&mut self) -> Result<()> {
        self.rendering = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::source::types::COLOR_PLANE;

    #[test]
    fn test_gradient_corners() {
        let source = TestPatternSource::new(4, 3);

        let bottom_left = source.pixel(COLOR_PLANE, 0, 0).unwrap();
        assert_eq!(bottom_left.rgb[0], 0.0);
        assert_eq!(bottom_left.rgb[1], 0.0);

        let top_right = source.pixel(COLOR_PLANE, 3, 2).unwrap();
        assert_eq!(top_right.rgb[0], 1.0);
        assert_eq!(top_right.rgb[1], 1.0);
        assert_eq!(top_right.alpha, Some(1.0));
    }

    #[test]
    fn test_out_of_bounds_pixel_is_unavailable() {
        let source = TestPatternSource::new(2, 2);
        let result = source.pixel(COLOR_PLANE, 2, 0);
        assert!(matches!(result, Err(CaptureError::SourceUnavailable(_))));
    }

    #[test]
    fn test_pane_controls() {
        let mut source = TestPatternSource::new(1, 1);
        source.set_frame(12).unwrap();
        source.resume_render().unwrap();
        assert!(source.is_rendering());
        source.pause_render().unwrap();
        assert!(!source.is_rendering());
        assert_eq!(source.frame(), 12);
    }

    #[test]
    fn test_default_scanline_reads_pixels() {
        let source = TestPatternSource::new(3, 1).with_exposure(2.0);
        let mut row = vec![0.0f32; 9];
        source.read_scanline(COLOR_PLANE, 0, &mut row).unwrap();
        assert_eq!(row[0], 0.0);
        assert_eq!(row[3], 1.0);
        assert_eq!(row[6], 2.0);
    }
}
