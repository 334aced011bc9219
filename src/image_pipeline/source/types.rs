//! Source-side data types

/// Name of the color plane read from the pane.
pub const COLOR_PLANE: &str = "C";

/// Current image size of a source, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// One pixel read back from a source. Samples are linear light and may exceed 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub rgb: [f32; 3],
    pub alpha: Option<f32>,
}

impl Sample {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { rgb: [r, g, b], alpha: None }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { rgb: [r, g, b], alpha: Some(a) }
    }

    pub fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }
}
