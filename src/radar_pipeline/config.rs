//! Pipeline configuration
//!
//! Defaults point at the Bangkok Metropolitan Administration radar. Any field
//! can be overridden from a TOML file or through [`RadarConfigBuilder`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::radar_pipeline::classify::{HueScale, IntensityBand};
use crate::radar_pipeline::common::error::{CoverageError, Result};
use crate::radar_pipeline::region::RegionOfInterest;

pub const DEFAULT_SOURCE_URL: &str = "https://weather.bangkok.go.th/Images/Radar/radar.jpg";

/// Configuration for one coverage run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// URL of the radar image
    pub source_url: String,
    /// Directory receiving the timestamped radar and segmented images
    pub output_dir: PathBuf,
    /// Annotated preview, overwritten on every run
    pub preview_path: PathBuf,
    /// Whether to keep timestamped copies in `output_dir`
    pub save_images: bool,
    /// Area over which coverage is measured
    pub roi: RegionOfInterest,
    /// Precipitation bands, unioned into one mask
    pub bands: Vec<IntensityBand>,
    /// Hue convention used by the band thresholds
    pub hue_scale: HueScale,
    /// JPEG quality for written images (1-100)
    pub jpeg_quality: u8,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

/// The three reflectivity bands of the BMA radar legend.
pub fn default_bands() -> Vec<IntensityBand> {
    vec![
        IntensityBand::new("low", [40, 100, 100], [70, 255, 255]).with_description("9.5 - 29.0 dBZ"),
        IntensityBand::new("mid", [16, 100, 100], [39, 255, 255]).with_description("29.0 - 44.0 dBZ"),
        IntensityBand::new("high", [140, 100, 100], [15, 255, 255]).with_description("44.0+ dBZ"),
    ]
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_dir: PathBuf::from("radar_img"),
            preview_path: PathBuf::from("radar_tmp.jpg"),
            save_images: true,
            roi: RegionOfInterest::from_origin(240, 360, 300, 200),
            bands: default_bands(),
            hue_scale: HueScale::Half,
            jpeg_quality: 95,
            request_timeout_secs: 30,
        }
    }
}

impl RadarConfig {
    pub fn builder() -> RadarConfigBuilder {
        RadarConfigBuilder::default()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CoverageError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoverageError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Checks everything that can be checked without seeing an image.
    pub fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(CoverageError::NoBands);
        }
        for band in &self.bands {
            band.validate(self.hue_scale)?;
        }
        if self.roi.is_degenerate() {
            return Err(CoverageError::Config(format!(
                "region {} has no area",
                self.roi
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(CoverageError::Config(format!(
                "jpeg_quality {} not in 1..=100",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

/// Builder for RadarConfig
#[derive(Default)]
pub struct RadarConfigBuilder {
    source_url: Option<String>,
    output_dir: Option<PathBuf>,
    preview_path: Option<PathBuf>,
    save_images: Option<bool>,
    roi: Option<RegionOfInterest>,
    bands: Option<Vec<IntensityBand>>,
    hue_scale: Option<HueScale>,
    jpeg_quality: Option<u8>,
    request_timeout_secs: Option<u64>,
}

impl RadarConfigBuilder {
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn preview_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview_path = Some(path.into());
        self
    }

    pub fn save_images(mut self, save: bool) -> Self {
        self.save_images = Some(save);
        self
    }

    pub fn roi(mut self, roi: RegionOfInterest) -> Self {
        self.roi = Some(roi);
        self
    }

    pub fn bands(mut self, bands: Vec<IntensityBand>) -> Self {
        self.bands = Some(bands);
        self
    }

    pub fn hue_scale(mut self, scale: HueScale) -> Self {
        self.hue_scale = Some(scale);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> RadarConfig {
        let default = RadarConfig::default();
        RadarConfig {
            source_url: self.source_url.unwrap_or(default.source_url),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            preview_path: self.preview_path.unwrap_or(default.preview_path),
            save_images: self.save_images.unwrap_or(default.save_images),
            roi: self.roi.unwrap_or(default.roi),
            bands: self.bands.unwrap_or(default.bands),
            hue_scale: self.hue_scale.unwrap_or(default.hue_scale),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(default.request_timeout_secs),
        }
    }
}
