//! Capture configuration types

use std::time::Duration;

/// Display gamma applied to linear samples (approximate sRGB).
pub const DEFAULT_GAMMA: f32 = 2.2;

/// How long a preview frame renders before it is paused and read back.
pub const DEFAULT_RENDER_TIME: Duration = Duration::from_secs(1);

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}

/// Float to 8-bit conversion after gamma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantization {
    /// Drop the fractional part, like an integer cast
    Truncate,
    /// Round to the nearest code value
    Round,
}

/// What to do with samples that have no real-valued gamma result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePolicy {
    /// Negative and non-finite samples become 0.0
    ClampToZero,
    /// Negative and non-finite samples fail the capture, reporting the
    /// first offending sample in row-major output order
    Reject,
}

/// Configuration for a frame capture
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub gamma: f32,
    pub quantization: Quantization,
    pub sample_policy: SamplePolicy,
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to check the source resolution against `max_dimension`
    pub validate_dimensions: bool,
    /// Upper bound on width and height; no bound when `None`
    pub max_dimension: Option<usize>,
    /// Tone map rows on the rayon pool
    pub parallel: bool,
    /// Wall-clock time each frame renders before readback, used by sequences
    pub render_time: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            quantization: Quantization::Truncate,
            sample_policy: SamplePolicy::ClampToZero,
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            max_dimension: None,
            parallel: true,
            render_time: DEFAULT_RENDER_TIME,
        }
    }
}

impl CaptureConfig {
    pub fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::default()
    }
}

/// Builder for CaptureConfig
#[derive(Default)]
pub struct CaptureConfigBuilder {
    gamma: Option<f32>,
    quantization: Option<Quantization>,
    sample_policy: Option<SamplePolicy>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    parallel: Option<bool>,
    render_time: Option<Duration>,
}

impl CaptureConfigBuilder {
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn quantization(mut self, quantization: Quantization) -> Self {
        self.quantization = Some(quantization);
        self
    }

    pub fn sample_policy(mut self, policy: SamplePolicy) -> Self {
        self.sample_policy = Some(policy);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn render_time(mut self, render_time: Duration) -> Self {
        self.render_time = Some(render_time);
        self
    }

    pub fn build(self) -> CaptureConfig {
        let default = CaptureConfig::default();
        CaptureConfig {
            gamma: self.gamma.unwrap_or(default.gamma),
            quantization: self.quantization.unwrap_or(default.quantization),
            sample_policy: self.sample_policy.unwrap_or(default.sample_policy),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            parallel: self.parallel.unwrap_or(default.parallel),
            render_time: self.render_time.unwrap_or(default.render_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_capture() {
        let config = CaptureConfig::default();
        assert_eq!(config.gamma, 2.2);
        assert_eq!(config.quantization, Quantization::Truncate);
        assert_eq!(config.sample_policy, SamplePolicy::ClampToZero);
        assert_eq!(config.compression, TiffCompression::None);
        assert_eq!(config.render_time, Duration::from_secs(1));
        assert_eq!(config.max_dimension, None);
    }

    #[test]
    fn test_config_builder() {
        let config = CaptureConfig::builder()
            .compression(TiffCompression::Deflate)
            .quantization(Quantization::Round)
            .sample_policy(SamplePolicy::Reject)
            .validate_dimensions(false)
            .max_dimension(Some(10000))
            .parallel(false)
            .render_time(Duration::from_millis(250))
            .build();

        assert_eq!(config.compression, TiffCompression::Deflate);
        assert_eq!(config.quantization, Quantization::Round);
        assert_eq!(config.sample_policy, SamplePolicy::Reject);
        assert_eq!(config.predictor, None);
        assert!(!config.validate_dimensions);
        assert_eq!(config.max_dimension, Some(10000));
        assert!(!config.parallel);
        assert_eq!(config.render_time, Duration::from_millis(250));
    }
}
