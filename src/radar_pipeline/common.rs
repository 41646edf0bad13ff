//! Common utilities module
//!
//! Error types and step timing shared by every stage of the radar pipeline.

pub mod error;
pub mod timing;

pub use error::{CoverageError, Result};
pub use timing::PipelineTimings;
