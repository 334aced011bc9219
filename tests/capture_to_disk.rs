use std::time::Duration;

use ipr_capture::image_pipeline::{
    CaptureConfig, CaptureError, FrameCapture, FrameRange, OutputTemplate, Quantization,
    TestPatternSource,
};

#[test]
fn captures_a_short_sequence_into_a_fresh_directory() {
    let dir = tempfile::tempdir().unwrap();
    let template = OutputTemplate::from_path(dir.path().join("render").join("shot.IPR"));
    let config = CaptureConfig::builder()
        .render_time(Duration::ZERO)
        .quantization(Quantization::Round)
        .build();
    let mut pane = TestPatternSource::new(32, 18).with_exposure(3.0);

    let report = FrameCapture::new(config)
        .capture_sequence(&mut pane, FrameRange::new(1, 3, 1).unwrap(), &template)
        .unwrap();

    let names: Vec<String> = report
        .paths()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["shot.IPR.0001.tif", "shot.IPR.0002.tif", "shot.IPR.0003.tif"]);
    assert!(report.paths().all(|p| std::fs::metadata(p).unwrap().len() > 0));
}

#[test]
fn single_capture_requires_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let template = OutputTemplate::new(dir.path().join("not-created"), "shot");
    let source = TestPatternSource::new(4, 4);

    let result = FrameCapture::new(CaptureConfig::default()).capture_frame(&source, 1, &template);
    assert!(matches!(result, Err(CaptureError::OutputWriteError(_))));
}
