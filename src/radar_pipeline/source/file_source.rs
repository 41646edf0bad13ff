use std::path::{Path, PathBuf};

use tracing::debug;

use crate::radar_pipeline::common::error::Result;
use crate::radar_pipeline::source::reader::RadarImageSource;

/// Reads a previously saved radar image from disk.
pub struct FileRadarSource {
    path: PathBuf,
}

impl FileRadarSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RadarImageSource for FileRadarSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!(path = %self.path.display(), "Reading radar image");
        Ok(std::fs::read(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar_pipeline::common::error::CoverageError;

    #[test]
    fn test_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radar.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        let source = FileRadarSource::new(&path);
        assert_eq!(source.fetch().unwrap(), b"not really a jpeg");
        assert!(source.describe().ends_with("radar.jpg"));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRadarSource::new(dir.path().join("absent.jpg"));
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, CoverageError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
