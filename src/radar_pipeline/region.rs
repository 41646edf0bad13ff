//! Region of interest cropping.
//!
//! A region never gets clamped to the image. If the upstream radar image
//! changes size, the crop fails with [`CoverageError::InvalidRegion`]. It
//! does not measure a smaller area without saying so.

use std::fmt;

use image::{ImageBuffer, Pixel, imageops};
use serde::{Deserialize, Serialize};

use crate::radar_pipeline::common::error::{CoverageError, Result};

/// Half-open rectangle `[x0, x1) x [y0, y1)` in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOfInterest {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl RegionOfInterest {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle from a top-left corner and a size.
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// The whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Checks `0 <= x0 < x1 <= width` and `0 <= y0 < y1 <= height`.
    pub fn check_within(&self, width: u32, height: u32) -> Result<()> {
        if self.is_degenerate() || self.x1 > width || self.y1 > height {
            return Err(CoverageError::InvalidRegion {
                roi: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for RegionOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Copies the region out of `image`. Works for masks and color images alike.
pub fn crop<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    roi: &RegionOfInterest,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel + 'static,
{
    let (width, height) = image.dimensions();
    roi.check_within(width, height)?;
    Ok(imageops::crop_imm(image, roi.x0, roi.y0, roi.width(), roi.height()).to_image())
}
