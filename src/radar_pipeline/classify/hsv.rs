//! RGB to HSV conversion.
//!
//! Uses the same 12-bit fixed-point reciprocal tables as OpenCV's 8-bit
//! `BGR2HSV`, so band thresholds tuned against OpenCV select the same pixels
//! here, including at band edges.

use std::sync::LazyLock;

use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};

use crate::radar_pipeline::common::error::{CoverageError, Result};

/// Numeric range used for the hue channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueScale {
    /// Half-degrees, 0..=179 (OpenCV 8-bit convention).
    #[default]
    Half,
    /// Whole degrees, 0..=359.
    Degrees,
}

impl HueScale {
    /// Largest hue value representable in this scale.
    pub fn max(self) -> u16 {
        match self {
            HueScale::Half => 179,
            HueScale::Degrees => 359,
        }
    }

    fn period(self) -> i32 {
        self.max() as i32 + 1
    }

    fn hue_divisors(self) -> &'static [i32; 256] {
        match self {
            HueScale::Half => &TABLES.hdiv_half,
            HueScale::Degrees => &TABLES.hdiv_degrees,
        }
    }
}

const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);

/// Fixed-point reciprocals: `sdiv[v] = round(255 << 12 / v)` and
/// `hdiv[d] = round(period << 12 / 6d)`. Index 0 holds 0.
struct DivTables {
    sdiv: [i32; 256],
    hdiv_half: [i32; 256],
    hdiv_degrees: [i32; 256],
}

static TABLES: LazyLock<DivTables> = LazyLock::new(|| {
    let mut tables = DivTables {
        sdiv: [0; 256],
        hdiv_half: [0; 256],
        hdiv_degrees: [0; 256],
    };
    for i in 1..256 {
        let d = i as f64;
        tables.sdiv[i] = ((255 << HSV_SHIFT) as f64 / d).round() as i32;
        tables.hdiv_half[i] = ((180 << HSV_SHIFT) as f64 / (6.0 * d)).round() as i32;
        tables.hdiv_degrees[i] = ((360 << HSV_SHIFT) as f64 / (6.0 * d)).round() as i32;
    }
    tables
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

pub fn rgb_to_hsv(rgb: [u8; 3], scale: HueScale) -> Hsv {
    let [r, g, b] = rgb.map(i32::from);
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s = (diff * TABLES.sdiv[v as usize] + HSV_ROUND) >> HSV_SHIFT;

    // Hue numerator in units of 60 degrees / diff, offset by sector.
    let numerator = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let h = (numerator * scale.hue_divisors()[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
    let h = if h < 0 { h + scale.period() } else { h };

    Hsv {
        h: h as u16,
        s: s as u8,
        v: v as u8,
    }
}

/// Dense HSV rendition of an RGB image, row-major.
#[derive(Debug, Clone)]
pub struct HsvImage {
    width: u32,
    height: u32,
    scale: HueScale,
    pixels: Vec<Hsv>,
}

impl HsvImage {
    pub fn from_rgb(image: &RgbImage, scale: HueScale) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| rgb_to_hsv(p.0, scale)).collect();
        Self {
            width,
            height,
            scale,
            pixels,
        }
    }

    /// Only 3-channel 8-bit images can be classified.
    pub fn from_dynamic(image: &DynamicImage, scale: HueScale) -> Result<Self> {
        match image {
            DynamicImage::ImageRgb8(rgb) => Ok(Self::from_rgb(rgb, scale)),
            other => Err(CoverageError::ColorSpace(format!(
                "expected 3-channel 8-bit image, got {:?}",
                other.color()
            ))),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn scale(&self) -> HueScale {
        self.scale
    }

    pub fn get(&self, x: u32, y: u32) -> Hsv {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn pixels(&self) -> &[Hsv] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbaImage};

    #[test]
    fn test_primaries_half_scale() {
        assert_eq!(rgb_to_hsv([255, 0, 0], HueScale::Half), Hsv::new(0, 255, 255));
        assert_eq!(rgb_to_hsv([0, 255, 0], HueScale::Half), Hsv::new(60, 255, 255));
        assert_eq!(rgb_to_hsv([0, 0, 255], HueScale::Half), Hsv::new(120, 255, 255));
    }

    #[test]
    fn test_primaries_degree_scale() {
        assert_eq!(rgb_to_hsv([0, 255, 0], HueScale::Degrees).h, 120);
        assert_eq!(rgb_to_hsv([0, 0, 255], HueScale::Degrees).h, 240);
        assert_eq!(rgb_to_hsv([255, 0, 255], HueScale::Degrees).h, 300);
    }

    #[test]
    fn test_grey_and_black_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv([0, 0, 0], HueScale::Half), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv([128, 128, 128], HueScale::Half), Hsv::new(0, 0, 128));
    }

    #[test]
    fn test_negative_hue_wraps_to_top_of_scale() {
        // Red dominant, blue above green: just below 360 degrees.
        let hsv = rgb_to_hsv([255, 0, 10], HueScale::Half);
        assert_eq!(hsv.h, 179);
        let hsv = rgb_to_hsv([255, 0, 10], HueScale::Degrees);
        assert_eq!(hsv.h, 358);
    }

    #[test]
    fn test_intermediate_hue_and_saturation() {
        // 110 degrees, s = 123/177 of full, v = 177.
        assert_eq!(rgb_to_hsv([75, 177, 54], HueScale::Half), Hsv::new(55, 177, 177));
        // Orange: 30 degrees.
        assert_eq!(rgb_to_hsv([255, 128, 0], HueScale::Half).h, 15);
    }

    #[test]
    fn test_fixed_point_rounding_at_sector_edges() {
        // Exact hues are 119.48 and 119.51; the fixed-point tables round the other way.
        assert_eq!(rgb_to_hsv([0, 1, 58], HueScale::Half).h, 120);
        assert_eq!(rgb_to_hsv([0, 1, 61], HueScale::Half).h, 119);
    }

    #[test]
    fn test_divisor_tables() {
        assert_eq!(TABLES.sdiv[0], 0);
        assert_eq!(TABLES.sdiv[255], 4096);
        assert_eq!(TABLES.hdiv_half[255], 482);
        assert_eq!(TABLES.hdiv_half[58], 2119);
        assert_eq!(TABLES.hdiv_degrees[255], 964);
    }

    #[test]
    fn test_from_dynamic_rejects_non_rgb() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(4, 4));
        assert!(matches!(
            HsvImage::from_dynamic(&gray, HueScale::Half).unwrap_err(),
            CoverageError::ColorSpace(_)
        ));

        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        assert!(HsvImage::from_dynamic(&rgba, HueScale::Half).is_err());
    }

    #[test]
    fn test_from_rgb_keeps_layout() {
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(2, 1, Rgb([0, 0, 255]));
        let hsv = HsvImage::from_rgb(&image, HueScale::Half);

        assert_eq!(hsv.dimensions(), (3, 2));
        assert_eq!(hsv.pixels().len(), 6);
        assert_eq!(hsv.get(2, 1).h, 120);
        assert_eq!(hsv.get(0, 0), Hsv::default());
    }
}
