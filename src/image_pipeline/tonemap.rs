//! Tone mapping module
//!
//! Turns linear float images into display-referred 8-bit frames.

mod mapper;
mod gamma_mapper;
pub mod types;

pub use mapper::ToneMapper;
pub use gamma_mapper::{GammaToneMapper, encode_sample};
pub use types::{Image, EncodedFrame};
