use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::common::config::{CaptureConfig, Quantization, SamplePolicy};
use crate::image_pipeline::common::error::{CaptureError, Result};
use crate::image_pipeline::tonemap::mapper::ToneMapper;
use crate::image_pipeline::tonemap::types::{EncodedFrame, Image};

/// Power-law tone map: `pow(sample, 1 / gamma) * 255`, then quantized to 8 bits.
///
/// No highlight compression is applied; anything that lands above 255 saturates.
pub struct GammaToneMapper;

/// Encodes a single, already sanitized, linear sample.
pub fn encode_sample(sample: f32, gamma: f32, quantization: Quantization) -> u8 {
    let value = sample.powf(1.0 / gamma) * 255.0;
    // float -> int casts saturate
    match quantization {
        Quantization::Truncate => value as u8,
        Quantization::Round => value.round() as u8,
    }
}

fn sanitize(sample: f32, policy: SamplePolicy) -> Option<f32> {
    if sample.is_finite() && sample >= 0.0 {
        return Some(sample);
    }
    match policy {
        SamplePolicy::ClampToZero => Some(0.0),
        SamplePolicy::Reject => None,
    }
}

fn encode_row(row: &[f32], out: &mut [u8], y: usize, config: &CaptureConfig) -> Result<()> {
    for (i, (&sample, code)) in row.iter().zip(out.iter_mut()).enumerate() {
        let sample = sanitize(sample, config.sample_policy).ok_or_else(|| CaptureError::InvalidSample {
            x: i / 3,
            y,
            value: sample,
        })?;
        *code = encode_sample(sample, config.gamma, config.quantization);
    }
    Ok(())
}

impl ToneMapper for GammaToneMapper {
    fn tone_map(&self, image: &Image, config: &CaptureConfig) -> Result<EncodedFrame> {
        if !(config.gamma.is_finite() && config.gamma > 0.0) {
            return Err(CaptureError::EncodeError(format!(
                "gamma must be a positive number, got {}",
                config.gamma
            )));
        }

        debug!(
            width = image.width,
            height = image.height,
            gamma = config.gamma,
            parallel = config.parallel,
            "Tone mapping image"
        );

        if image.width == 0 || image.height == 0 {
            return Err(CaptureError::InvalidDimensions(image.width, image.height));
        }

        let row_len = image.row_len();
        let mut data = vec![0u8; image.data.len()];

        if config.parallel {
            // rows finish in any order; keep the error of the lowest row
            let results: Vec<Result<()>> = image
                .data
                .par_chunks(row_len)
                .zip(data.par_chunks_mut(row_len))
                .enumerate()
                .map(|(y, (row, out))| encode_row(row, out, y, config))
                .collect();
            if let Some(err) = results.into_iter().find_map(Result::err) {
                return Err(err);
            }
        } else {
            for (y, (row, out)) in image
                .data
                .chunks(row_len)
                .zip(data.chunks_mut(row_len))
                .enumerate()
            {
                encode_row(row, out, y, config)?;
            }
        }

        Ok(EncodedFrame {
            width: image.width,
            height: image.height,
            data,
        })
    }
}
