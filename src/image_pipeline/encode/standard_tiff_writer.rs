use std::io::{Cursor, Write};
use tiff::encoder::{Compression, TiffEncoder, colortype, compression::DeflateLevel};
use tiff::tags::Predictor;
use tracing::debug;
use crate::image_pipeline::common::config::{CaptureConfig, TiffCompression};
use crate::image_pipeline::common::error::{CaptureError, Result};
use crate::image_pipeline::encode::writer::FrameWriter;
use crate::image_pipeline::tonemap::types::EncodedFrame;

/// Writes frames as single-image RGB8 TIFF files.
pub struct StandardTiffWriter;

impl FrameWriter for StandardTiffWriter {
    fn extension(&self) -> &str {
        "tif"
    }

    fn write_frame(&self, frame: &EncodedFrame, output: &mut dyn Write, config: &CaptureConfig) -> Result<()> {
        debug!("Encoding TIFF frame: {}x{}", frame.width, frame.height);

        let width = u32::try_from(frame.width)
            .map_err(|_| CaptureError::InvalidDimensions(frame.width, frame.height))?;
        let height = u32::try_from(frame.height)
            .map_err(|_| CaptureError::InvalidDimensions(frame.width, frame.height))?;

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        };

        // the encoder needs Seek, so encode in memory first
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| CaptureError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => Predictor::Horizontal,
                _ => Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<colortype::RGB8>(width, height, &frame.data)
            .map_err(|e| CaptureError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!(bytes = buffer.len(), "TIFF encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiff::ColorType;
    use tiff::decoder::{Decoder, DecodingResult};

    fn sample_frame() -> EncodedFrame {
        EncodedFrame {
            width: 3,
            height: 2,
            data: (0..18).map(|v| (v * 14) as u8).collect(),
        }
    }

    fn decode(bytes: Vec<u8>) -> (u32, u32, ColorType, Vec<u8>) {
        let mut decoder = Decoder::new(Cursor::new(bytes)).unwrap();
        let (w, h) = decoder.dimensions().unwrap();
        let color = decoder.colortype().unwrap();
        let data = match decoder.read_image().unwrap() {
            DecodingResult::U8(data) => data,
            _ => panic!("expected 8-bit samples"),
        };
        (w, h, color, data)
    }

    #[test]
    fn test_uncompressed_rgb8_layout() {
        let frame = sample_frame();
        let mut out = Vec::new();
        StandardTiffWriter
            .write_frame(&frame, &mut out, &CaptureConfig::default())
            .unwrap();

        let (w, h, color, data) = decode(out);
        assert_eq!((w, h), (3, 2));
        assert_eq!(color, ColorType::RGB(8));
        assert_eq!(data, frame.data);
    }

    #[test]
    fn test_compressed_variants_decode_to_same_pixels() {
        let frame = sample_frame();
        for compression in [TiffCompression::Lzw, TiffCompression::Deflate] {
            let config = CaptureConfig::builder()
                .compression(compression)
                .predictor(Some(2))
                .build();
            let mut out = Vec::new();
            StandardTiffWriter.write_frame(&frame, &mut out, &config).unwrap();

            let (_, _, _, data) = decode(out);
            assert_eq!(data, frame.data, "{compression:?}");
        }
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let frame = sample_frame();
        let config = CaptureConfig::default();
        let mut first = Vec::new();
        let mut second = Vec::new();
        StandardTiffWriter.write_frame(&frame, &mut first, &config).unwrap();
        StandardTiffWriter.write_frame(&frame, &mut second, &config).unwrap();
        assert_eq!(first, second);
    }
}
