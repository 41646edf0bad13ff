use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::radar_pipeline::common::error::{CoverageError, Result};
use crate::radar_pipeline::output::writer::OutputWriter;

pub struct JpegFileWriter;

impl OutputWriter for JpegFileWriter {
    fn write_jpeg(&self, image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            quality,
            "Encoding JPEG"
        );

        let file = File::create(path)
            .map_err(|e| CoverageError::Write(format!("{}: {}", path.display(), e)))?;
        let mut output = BufWriter::new(file);

        JpegEncoder::new_with_quality(&mut output, quality)
            .encode_image(image)
            .map_err(|e| CoverageError::Write(format!("{}: {}", path.display(), e)))?;

        output
            .flush()
            .map_err(|e| CoverageError::Write(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_writes_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let image = RgbImage::from_pixel(16, 8, Rgb([0, 200, 0]));

        JpegFileWriter.write_jpeg(&image, &path, 90).unwrap();

        let read = image::open(&path).unwrap();
        assert_eq!((read.width(), read.height()), (16, 8));
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.jpg");
        let err = JpegFileWriter
            .write_jpeg(&RgbImage::new(2, 2), &path, 90)
            .unwrap_err();
        assert!(matches!(err, CoverageError::Write(_)));
    }
}
