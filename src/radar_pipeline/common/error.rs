use thiserror::Error;

use crate::radar_pipeline::region::RegionOfInterest;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Failed to fetch radar image: {0}")]
    Network(String),

    #[error("Failed to decode radar image: {0}")]
    Decode(String),

    #[error("Cannot convert image to HSV: {0}")]
    ColorSpace(String),

    #[error("Region {roi} lies outside image bounds {width}x{height}")]
    InvalidRegion {
        roi: RegionOfInterest,
        width: u32,
        height: u32,
    },

    #[error("Region contains no pixels")]
    EmptyRegion,

    #[error("At least one intensity band is required")]
    NoBands,

    #[error("Invalid intensity band: {0}")]
    InvalidBand(String),

    #[error("Mask dimensions differ: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("Failed to write output file: {0}")]
    Write(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
