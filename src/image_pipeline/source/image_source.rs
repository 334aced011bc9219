use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::source::types::{Resolution, Sample};

/// Read access to a pane's pixel buffer.
///
/// Scanlines are addressed bottom-up: `y == 0` is the bottom row.
pub trait ImageSource {
    fn image_resolution(&self) -> Result<Resolution>;

    fn pixel(&self, plane: &str, x: usize, y: usize) -> Result<Sample>;

    /// Reads one source scanline as interleaved RGB into `out` (`3 * width` floats).
    ///
    /// Sources with a bulk readback path should override this.
    fn read_scanline(&self, plane: &str, y: usize, out: &mut [f32]) -> Result<()> {
        for (x, rgb) in out.chunks_exact_mut(3).enumerate() {
            rgb.copy_from_slice(&self.pixel(plane, x, y)?.rgb);
        }
        Ok(())
    }
}

/// A live preview render that can be moved between frames and paused for readback.
pub trait PreviewPane: ImageSource {
    fn set_frame(&mut self, frame: u32) -> Result<()>;

    fn resume_render(&mut self) -> Result<()>;

    fn pause_render(&mut self) -> Result<()>;
}
