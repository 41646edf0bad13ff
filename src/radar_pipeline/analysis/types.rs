use std::path::PathBuf;

use image::{GrayImage, RgbImage};

use crate::radar_pipeline::common::timing::PipelineTimings;

/// Result of classifying one radar image.
#[derive(Debug, Clone)]
pub struct CoverageAnalysis {
    /// Share of the region covered by precipitation, in percent
    pub coverage: f64,
    /// Foreground pixels inside the region
    pub foreground_pixels: u64,
    /// Total pixels inside the region
    pub region_pixels: u64,
    /// Union of all band masks over the full image
    pub combined_mask: GrayImage,
    /// Full image with non-precipitation pixels blacked out
    pub segmented: RgbImage,
    /// `combined_mask` cropped to the region
    pub region_mask: GrayImage,
    /// `segmented` cropped to the region
    pub region_segmented: RgbImage,
}

/// Summary of a full `run`.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub coverage: f64,
    pub image_width: u32,
    pub image_height: u32,
    pub foreground_pixels: u64,
    pub region_pixels: u64,
    pub written: Vec<PathBuf>,
    pub failed_writes: Vec<(PathBuf, String)>,
    pub timings: PipelineTimings,
}
