use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::radar_pipeline::output::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::radar_pipeline::region::RegionOfInterest;

pub const ANNOTATION_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

const BORDER_THICKNESS: u32 = 2;
const LABEL_SCALE: u32 = 2;
const LABEL_ORIGIN: (i32, i32) = (10, 30);

pub fn coverage_label(coverage: f64) -> String {
    format!("Clouds: {:.1}%", coverage)
}

/// Outlines `roi` with lines `thickness` pixels wide, growing inwards.
pub fn draw_region(canvas: &mut RgbImage, roi: &RegionOfInterest, thickness: u32, color: Rgb<u8>) {
    for inset in 0..thickness {
        let width = roi.width().saturating_sub(2 * inset);
        let height = roi.height().saturating_sub(2 * inset);
        if width == 0 || height == 0 {
            break;
        }
        let rect = Rect::at((roi.x0 + inset) as i32, (roi.y0 + inset) as i32).of_size(width, height);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

/// Draws `text` with its baseline at `y`, clipped to the canvas.
/// Characters without a glyph leave a blank cell.
pub fn draw_label(canvas: &mut RgbImage, text: &str, x: i32, y: i32, scale: u32, color: Rgb<u8>) {
    let scale = scale.max(1);
    let advance = ((GLYPH_WIDTH + 1) * scale) as i32;
    let top = y - (GLYPH_HEIGHT * scale) as i32;

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let left = x + i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let rect = Rect::at(
                    left + (col * scale) as i32,
                    top + (row as u32 * scale) as i32,
                )
                .of_size(scale, scale);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}

/// Copy of `image` with the region outlined and the coverage printed.
pub fn annotate(image: &RgbImage, roi: &RegionOfInterest, coverage: f64) -> RgbImage {
    let mut canvas = image.clone();
    draw_region(&mut canvas, roi, BORDER_THICKNESS, ANNOTATION_COLOR);
    draw_label(
        &mut canvas,
        &coverage_label(coverage),
        LABEL_ORIGIN.0,
        LABEL_ORIGIN.1,
        LABEL_SCALE,
        ANNOTATION_COLOR,
    );
    canvas
}
