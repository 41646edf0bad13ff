use image::GrayImage;

use crate::radar_pipeline::classify::count_foreground;
use crate::radar_pipeline::common::error::{CoverageError, Result};

/// Percentage of foreground cells in `mask`, in `[0, 100]`.
pub fn coverage_percentage(mask: &GrayImage) -> Result<f64> {
    let total = u64::from(mask.width()) * u64::from(mask.height());
    if total == 0 {
        return Err(CoverageError::EmptyRegion);
    }
    Ok(100.0 * count_foreground(mask) as f64 / total as f64)
}
