//! Capture orchestration module
//!
//! Single-frame capture (read, tone map, write) and the frame-range loop
//! that drives a preview pane through a sequence.

mod frame_capture;
mod sequence;
mod timing;


pub use frame_capture::FrameCapture;
pub use sequence::{CapturedFrame, FrameRange, SequenceReport};
pub use timing::{CaptureTimings, StepTiming, Timer};
