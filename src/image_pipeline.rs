//! Preview capture pipeline
//!
//! Reads a render-preview pane through the [`source`] traits, tone maps the
//! linear samples to 8-bit, and writes one image file per frame.

pub mod source;
pub mod tonemap;
pub mod encode;
pub mod output;
pub mod capture;
pub mod common;

pub use common::{
    CaptureError,
    Result,
    CaptureConfig,
    CaptureConfigBuilder,
    Quantization,
    SamplePolicy,
    TiffCompression,
};

pub use source::{
    ImageSource,
    PreviewPane,
    Resolution,
    Sample,
    TestPatternSource,
    COLOR_PLANE,
};

pub use tonemap::{
    Image,
    EncodedFrame,
    ToneMapper,
    GammaToneMapper,
};

pub use encode::{
    FrameWriter,
    StandardTiffWriter,
};

pub use output::OutputTemplate;

pub use capture::{
    FrameCapture,
    FrameRange,
    SequenceReport,
    CaptureTimings,
};
