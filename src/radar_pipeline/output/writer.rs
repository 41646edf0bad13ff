use std::path::Path;

use image::RgbImage;

use crate::radar_pipeline::common::error::Result;

pub trait OutputWriter {
    fn write_jpeg(&self, image: &RgbImage, path: &Path, quality: u8) -> Result<()>;
}
