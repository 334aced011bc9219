use std::path::{Path, PathBuf};

/// Directory plus base name; frame paths are `<directory>/<base>.<0000>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    pub directory: PathBuf,
    pub base_name: String,
}

impl OutputTemplate {
    pub fn new(directory: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        let base_name = base_name.into();
        Self {
            directory: directory.into(),
            base_name: base_name.trim_end_matches('.').to_string(),
        }
    }

    /// Splits `render/shot.IPR` into directory `render` and base `shot.IPR`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(directory, base_name)
    }

    pub fn file_name(&self, frame: u32, extension: &str) -> String {
        format!("{}.{:04}.{}", self.base_name, frame, extension)
    }

    pub fn frame_path(&self, frame: u32, extension: &str) -> PathBuf {
        self.directory.join(self.file_name(frame, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_is_zero_padded() {
        let template = OutputTemplate::new("render", "shot.IPR");
        assert_eq!(
            template.frame_path(7, "tif"),
            PathBuf::from("render/shot.IPR.0007.tif")
        );
        assert_eq!(template.file_name(240, "tif"), "shot.IPR.0240.tif");
    }

    #[test]
    fn test_wide_frame_numbers_are_not_truncated() {
        let template = OutputTemplate::new("out", "seq");
        assert_eq!(template.file_name(12345, "tif"), "seq.12345.tif");
    }

    #[test]
    fn test_trailing_dot_is_not_doubled() {
        let template = OutputTemplate::new("render", "scene.IPR.");
        assert_eq!(template.file_name(1, "tif"), "scene.IPR.0001.tif");
    }

    #[test]
    fn test_from_path_splits_directory_and_base() {
        let template = OutputTemplate::from_path("project/render/scene.IPR");
        assert_eq!(template.directory, PathBuf::from("project/render"));
        assert_eq!(template.base_name, "scene.IPR");

        let bare = OutputTemplate::from_path("scene");
        assert_eq!(bare.directory, PathBuf::new());
        assert_eq!(bare.frame_path(3, "tif"), PathBuf::from("scene.0003.tif"));
    }
}
