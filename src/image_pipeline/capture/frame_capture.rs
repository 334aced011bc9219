use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    common::config::CaptureConfig,
    common::error::{CaptureError, Result},
    capture::timing::CaptureTimings,
    encode::{FrameWriter, StandardTiffWriter},
    output::{OutputTemplate, write_atomically},
    source::{COLOR_PLANE, ImageSource, Resolution},
    tonemap::{EncodedFrame, GammaToneMapper, Image, ToneMapper},
};

/// Reads a frame from an [`ImageSource`], tone maps it and writes it to disk.
pub struct FrameCapture<M: ToneMapper, W: FrameWriter> {
    mapper: M,
    writer: W,
    config: CaptureConfig,
}

impl FrameCapture<GammaToneMapper, StandardTiffWriter> {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            mapper: GammaToneMapper,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<M: ToneMapper, W: FrameWriter> FrameCapture<M, W> {
    pub fn with_custom(mapper: M, writer: W, config: CaptureConfig) -> Self {
        Self {
            mapper,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, resolution: Resolution) -> Result<()> {
        let Resolution { width, height } = resolution;

        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions(width, height));
        }

        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(CaptureError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Reads the color plane into a top-down [`Image`]. Source scanlines are
    /// bottom-up, so output row `y` comes from source row `height - 1 - y`.
    pub fn read_image<S: ImageSource + ?Sized>(&self, source: &S) -> Result<Image> {
        let resolution = source.image_resolution()?;
        self.validate_dimensions(resolution)?;

        let height = resolution.height;
        resolution
            .width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(CaptureError::InvalidDimensions(resolution.width, height))?;

        let mut image = Image::new(resolution.width, height);
        for y in 0..height {
            source.read_scanline(COLOR_PLANE, (height - 1) - y, image.row_mut(y))?;
        }
        Ok(image)
    }

    /// Reads and tone maps the source without touching the filesystem.
    pub fn encode_frame<S: ImageSource + ?Sized>(&self, source: &S) -> Result<EncodedFrame> {
        let image = self.read_image(source)?;
        self.mapper.tone_map(&image, &self.config)
    }

    /// Captures `frame` to `template.frame_path(frame, ext)` and returns that path.
    ///
    /// The output directory must exist. The file is written atomically.
    pub fn capture_frame<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        frame: u32,
        template: &OutputTemplate,
    ) -> Result<PathBuf> {
        self.capture_frame_with_timings(source, frame, template)
            .map(|(path, _)| path)
    }

    #[instrument(skip(self, source, template))]
    pub fn capture_frame_with_timings<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        frame: u32,
        template: &OutputTemplate,
    ) -> Result<(PathBuf, CaptureTimings)> {
        let mut timings = CaptureTimings::new();
        let path = template.frame_path(frame, self.writer.extension());

        let image = {
            let _span = tracing::info_span!("read_source").entered();
            timings.record("read_source", || self.read_image(source))?
        };

        let encoded = {
            let _span = tracing::info_span!("tone_map",
                width = image.width,
                height = image.height
            ).entered();
            timings.record("tone_map", || self.mapper.tone_map(&image, &self.config))?
        };
        drop(image);

        {
            let _span = tracing::info_span!("encode_frame", path = %path.display()).entered();
            timings.record("encode_frame", || {
                write_atomically(&path, |out| {
                    self.writer.write_frame(&encoded, out, &self.config)
                })
            })?;
        }

        debug!(
            "Frame {} captured in {:.3}ms",
            frame,
            timings.total_duration().as_secs_f64() * 1000.0
        );
        info!(
            frame,
            width = encoded.width,
            height = encoded.height,
            output = %path.display(),
            "Frame saved"
        );
        Ok((path, timings))
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CaptureConfig) {
        self.config = config;
    }
}
