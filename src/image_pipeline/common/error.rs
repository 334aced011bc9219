use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Image source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid sample {value} at x={x}, y={y}")]
    InvalidSample { x: usize, y: usize, value: f32 },

    #[error("Invalid frame range: {0}")]
    InvalidFrameRange(String),

    #[error("Failed to encode frame: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
