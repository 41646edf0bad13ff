//! Annotation and persistence of pipeline results
//!
//! Every write is best-effort. A failed file is logged and reported, and the
//! remaining files are still attempted.

mod annotate;
mod glyphs;
mod jpeg_writer;
mod naming;
mod persist;
mod writer;

pub use annotate::{ANNOTATION_COLOR, annotate, coverage_label, draw_label, draw_region};
pub use jpeg_writer::JpegFileWriter;
pub use naming::{TimestampedPaths, timestamp_stem, timestamped_paths};
pub use persist::{WriteOutcome, write_all};
pub use writer::OutputWriter;
