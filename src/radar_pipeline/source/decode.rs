use image::DynamicImage;
use tracing::debug;

use crate::radar_pipeline::common::error::{CoverageError, Result};

/// Decodes an encoded image and forces it to 3-channel RGB8.
pub fn decode_radar_image(data: &[u8]) -> Result<DynamicImage> {
    if data.is_empty() {
        return Err(CoverageError::Decode("empty response body".to_string()));
    }

    let decoded =
        image::load_from_memory(data).map_err(|e| CoverageError::Decode(e.to_string()))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(CoverageError::Decode("decoded image is empty".to_string()));
    }

    debug!(
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded radar image"
    );

    Ok(match decoded {
        DynamicImage::ImageRgb8(_) => decoded,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    })
}
