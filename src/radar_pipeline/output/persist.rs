use std::path::PathBuf;

use image::RgbImage;
use tracing::{info, warn};

use crate::radar_pipeline::output::writer::OutputWriter;

#[derive(Debug, Default, Clone)]
pub struct WriteOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Writes each `(image, path)` pair, carrying on past failures.
pub fn write_all<W: OutputWriter + ?Sized>(
    writer: &W,
    outputs: &[(&RgbImage, PathBuf)],
    quality: u8,
) -> WriteOutcome {
    let mut outcome = WriteOutcome::default();
    for (image, path) in outputs {
        match writer.write_jpeg(image, path, quality) {
            Ok(()) => {
                info!(path = %path.display(), "Saved image");
                outcome.written.push(path.clone());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to save image");
                outcome.failed.push((path.clone(), e.to_string()));
            }
        }
    }
    outcome
}
