use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{CaptureError, Result},
    capture::{frame_capture::FrameCapture, timing::CaptureTimings},
    encode::FrameWriter,
    output::OutputTemplate,
    source::PreviewPane,
    tonemap::ToneMapper,
};

/// Inclusive frame range walked with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    start: u32,
    end: u32,
    step: u32,
}

impl Default for FrameRange {
    fn default() -> Self {
        Self { start: 1, end: 240, step: 1 }
    }
}

impl FrameRange {
    pub fn new(start: u32, end: u32, step: u32) -> Result<Self> {
        if step == 0 {
            return Err(CaptureError::InvalidFrameRange("step must be at least 1".to_string()));
        }
        if start > end {
            return Err(CaptureError::InvalidFrameRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end, step })
    }

    pub fn single(frame: u32) -> Self {
        Self { start: frame, end: frame, step: 1 }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        (self.start..=self.end).step_by(self.step as usize)
    }

    pub fn len(&self) -> usize {
        ((self.end - self.start) / self.step) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub frame: u32,
    pub path: PathBuf,
    pub timings: CaptureTimings,
}

/// Result of a sequence run.
#[derive(Debug, Clone, Default)]
pub struct SequenceReport {
    pub frames: Vec<CapturedFrame>,
    pub elapsed: Duration,
}

impl SequenceReport {
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.frames.iter().map(|f| &f.path)
    }
}

impl<M: ToneMapper, W: FrameWriter> FrameCapture<M, W> {
    /// Walks `pane` through `range`: each frame is rendered for the configured
    /// render time, paused, then captured. Creates the output directory first.
    ///
    /// Stops at the first error; frames written before it stay on disk.
    #[instrument(skip(self, pane, template), fields(start = range.start(), end = range.end(), step = range.step()))]
    pub fn capture_sequence<P: PreviewPane + ?Sized>(
        &self,
        pane: &mut P,
        range: FrameRange,
        template: &OutputTemplate,
    ) -> Result<SequenceReport> {
        let started = Instant::now();

        if !template.directory.as_os_str().is_empty() {
            std::fs::create_dir_all(&template.directory).map_err(|e| {
                CaptureError::OutputWriteError(format!("{}: {}", template.directory.display(), e))
            })?;
        }

        info!(
            frames = range.len(),
            output = %template.directory.display(),
            render_time_ms = self.config().render_time.as_millis() as u64,
            "Starting preview capture"
        );

        let mut report = SequenceReport::default();
        for frame in range.iter() {
            let mut timings = CaptureTimings::new();

            pane.set_frame(frame)?;
            pane.resume_render()?;
            timings.record("render", || std::thread::sleep(self.config().render_time));
            pane.pause_render()?;

            let (path, capture_timings) = self.capture_frame_with_timings(&*pane, frame, template)?;
            for step in capture_timings.steps() {
                timings.add_step(step.name.clone(), step.duration);
            }

            report.frames.push(CapturedFrame { frame, path, timings });
        }

        report.elapsed = started.elapsed();
        info!(
            "Captured {} frames in {:.2}s",
            report.frames.len(),
            report.elapsed.as_secs_f64()
        );
        Ok(report)
    }
}
