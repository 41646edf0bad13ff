//! Coverage pipeline orchestration
//!
//! Fixed single-pass flow: fetch, decode, classify, combine, crop, measure,
//! then annotate and persist. The first failing stage ends the run.

mod pipeline;
mod types;

pub use pipeline::CoveragePipeline;
pub use types::{CoverageAnalysis, CoverageReport};
