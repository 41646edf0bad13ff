//! Color-space classification
//!
//! Converts radar images to HSV and thresholds them into one binary mask per
//! intensity band. The masks can then be unioned into a single
//! "any precipitation" mask.

pub mod band;
pub mod hsv;
pub mod mask;

pub use band::{HsvRange, IntensityBand};
pub use hsv::{Hsv, HsvImage, HueScale};
pub use mask::{MASK_OFF, MASK_ON, apply_mask, combine_masks, count_foreground, in_range};

use image::GrayImage;
use tracing::debug;

/// Builds one mask per band, in band order.
pub fn band_masks(hsv: &HsvImage, bands: &[IntensityBand]) -> Vec<GrayImage> {
    bands
        .iter()
        .map(|band| {
            let mask = band.mask(hsv);
            debug!(
                band = %band.name,
                wraps = band.wraps(),
                foreground = count_foreground(&mask),
                "Band mask built"
            );
            mask
        })
        .collect()
}
