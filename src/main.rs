use std::time::Duration;

use ipr_capture::image_pipeline::{
    CaptureConfig, FrameCapture, FrameRange, OutputTemplate, TestPatternSource,
};
use ipr_capture::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting preview capture...");

    let config = CaptureConfig::builder()
        .render_time(Duration::from_millis(200))
        .build();
    let capture = FrameCapture::new(config);

    info!("Gamma: {}", capture.config().gamma);
    info!("Quantization: {:?}", capture.config().quantization);
    info!("Compression: {:?}", capture.config().compression);

    let mut pane = TestPatternSource::new(320, 180).with_exposure(1.25);
    let range = FrameRange::new(1, 24, 1)?;
    let template = OutputTemplate::new("render", "preview.IPR");

    match capture.capture_sequence(&mut pane, range, &template) {
        Ok(report) => {
            info!("Capture successful!");
            if let Some(last) = report.frames.last() {
                last.timings.log_summary();
            }
        }
        Err(e) => {
            error!("Capture failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
