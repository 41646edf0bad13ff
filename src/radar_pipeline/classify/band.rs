use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::radar_pipeline::classify::hsv::{Hsv, HsvImage, HueScale};
use crate::radar_pipeline::classify::mask::{in_range, union_into};
use crate::radar_pipeline::common::error::{CoverageError, Result};

/// Inclusive `lower..=upper` test on all three HSV channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u16; 3],
    pub upper: [u16; 3],
}

impl HsvRange {
    pub fn contains(&self, hsv: Hsv) -> bool {
        let s = u16::from(hsv.s);
        let v = u16::from(hsv.v);
        hsv.h >= self.lower[0]
            && hsv.h <= self.upper[0]
            && s >= self.lower[1]
            && s <= self.upper[1]
            && v >= self.lower[2]
            && v <= self.upper[2]
    }
}

/// A radar reflectivity band expressed as an HSV box.
///
/// When `min[0] > max[0]` the hue range crosses the origin and the band
/// covers `[min_h, H_MAX] ∪ [0, max_h]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityBand {
    pub name: String,
    /// Lower `(h, s, v)` bound, inclusive.
    pub min: [u16; 3],
    /// Upper `(h, s, v)` bound, inclusive.
    pub max: [u16; 3],
    /// Free-form label such as the dBZ span of the legend color. Not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IntensityBand {
    pub fn new(name: impl Into<String>, min: [u16; 3], max: [u16; 3]) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn wraps(&self) -> bool {
        self.min[0] > self.max[0]
    }

    /// The one or two plain ranges whose union is this band.
    pub fn ranges(&self, scale: HueScale) -> Vec<HsvRange> {
        if self.wraps() {
            vec![
                HsvRange {
                    lower: self.min,
                    upper: [scale.max(), self.max[1], self.max[2]],
                },
                HsvRange {
                    lower: [0, self.min[1], self.min[2]],
                    upper: self.max,
                },
            ]
        } else {
            vec![HsvRange {
                lower: self.min,
                upper: self.max,
            }]
        }
    }

    pub fn contains(&self, hsv: Hsv, scale: HueScale) -> bool {
        self.ranges(scale).iter().any(|range| range.contains(hsv))
    }

    /// Foreground (255) wherever the pixel falls in this band.
    pub fn mask(&self, hsv: &HsvImage) -> GrayImage {
        let mut mask = GrayImage::new(hsv.width(), hsv.height());
        for range in self.ranges(hsv.scale()) {
            union_into(&mut mask, &in_range(hsv, &range));
        }
        mask
    }

    pub fn validate(&self, scale: HueScale) -> Result<()> {
        let hue_max = scale.max();
        for (which, bound) in [("min", &self.min), ("max", &self.max)] {
            if bound[0] > hue_max {
                return Err(CoverageError::InvalidBand(format!(
                    "{}: {} hue {} exceeds {}",
                    self.name, which, bound[0], hue_max
                )));
            }
            if bound[1] > 255 || bound[2] > 255 {
                return Err(CoverageError::InvalidBand(format!(
                    "{}: {} saturation/value {:?} exceeds 255",
                    self.name,
                    which,
                    &bound[1..]
                )));
            }
        }
        if self.min[1] > self.max[1] || self.min[2] > self.max[2] {
            return Err(CoverageError::InvalidBand(format!(
                "{}: saturation/value lower bound above upper bound",
                self.name
            )));
        }
        Ok(())
    }
}
