//! Shared pieces of the capture pipeline: the error type and the capture configuration.

pub mod error;
pub mod config;

pub use error::{CaptureError, Result};
pub use config::{CaptureConfig, CaptureConfigBuilder, Quantization, SamplePolicy, TiffCompression};
