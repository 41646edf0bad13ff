//! Radar precipitation coverage pipeline
//!
//! Fetches a weather radar image and classifies its pixels into reflectivity
//! bands by HSV thresholding. It then measures the share of a fixed region
//! covered by precipitation.

pub mod analysis;
pub mod classify;
pub mod common;
pub mod config;
pub mod coverage;
pub mod output;
pub mod region;
pub mod source;


pub use common::{CoverageError, PipelineTimings, Result};

pub use analysis::{CoverageAnalysis, CoveragePipeline, CoverageReport};

pub use classify::{Hsv, HsvImage, HueScale, IntensityBand};

pub use config::{RadarConfig, RadarConfigBuilder};

pub use coverage::coverage_percentage;

pub use output::{JpegFileWriter, OutputWriter};

pub use region::{RegionOfInterest, crop};

pub use source::{FileRadarSource, HttpRadarSource, RadarImageSource, decode_radar_image};
