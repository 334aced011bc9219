//! Image buffers on either side of the tone map

/// Linear-light RGB image, row 0 is the top scanline
#[derive(Debug, Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    /// Interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<f32>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height * 3],
        }
    }

    pub fn row_len(&self) -> usize {
        self.width * 3
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let len = self.row_len();
        &mut self.data[y * len..(y + 1) * len]
    }
}

/// 8-bit RGB frame ready for encoding, row 0 is the top scanline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    pub width: usize,
    pub height: usize,
    /// Interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<u8>,
}

impl EncodedFrame {
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
