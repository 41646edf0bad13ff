//! Binary masks stored as `GrayImage` with values {0, 255}.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::radar_pipeline::classify::band::HsvRange;
use crate::radar_pipeline::classify::hsv::HsvImage;
use crate::radar_pipeline::common::error::{CoverageError, Result};

pub const MASK_OFF: u8 = 0;
pub const MASK_ON: u8 = u8::MAX;

pub fn in_range(hsv: &HsvImage, range: &HsvRange) -> GrayImage {
    GrayImage::from_fn(hsv.width(), hsv.height(), |x, y| {
        Luma([if range.contains(hsv.get(x, y)) { MASK_ON } else { MASK_OFF }])
    })
}

/// Saturating per-pixel add of `other` into `acc`. Both must be the same size.
pub(crate) fn union_into(acc: &mut GrayImage, other: &GrayImage) {
    debug_assert_eq!(acc.dimensions(), other.dimensions());
    for (a, b) in acc.iter_mut().zip(other.iter()) {
        *a = a.saturating_add(*b);
    }
}

/// Unions the masks: foreground wherever any input is foreground.
pub fn combine_masks(masks: &[GrayImage]) -> Result<GrayImage> {
    let (first, rest) = masks.split_first().ok_or(CoverageError::NoBands)?;
    let expected = first.dimensions();
    let mut combined = first.clone();
    for mask in rest {
        if mask.dimensions() != expected {
            return Err(CoverageError::DimensionMismatch {
                expected,
                found: mask.dimensions(),
            });
        }
        union_into(&mut combined, mask);
    }
    Ok(combined)
}

pub fn count_foreground(mask: &GrayImage) -> u64 {
    mask.iter().filter(|&&p| p != MASK_OFF).count() as u64
}

/// Keeps `image` where `mask` is set and paints everything else black.
pub fn apply_mask(image: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    if image.dimensions() != mask.dimensions() {
        return Err(CoverageError::DimensionMismatch {
            expected: image.dimensions(),
            found: mask.dimensions(),
        });
    }
    let mut out = RgbImage::new(image.width(), image.height());
    for ((dst, src), &Luma([m])) in out.pixels_mut().zip(image.pixels()).zip(mask.pixels()) {
        if m != MASK_OFF {
            *dst = *src;
        } else {
            *dst = Rgb([0, 0, 0]);
        }
    }
    Ok(out)
}
