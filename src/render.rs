//! Raster construction and bitmap-font text drawing.

use chrono::NaiveDateTime;
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

/// Raster width in pixels.
pub const WIDTH: u32 = 640;
/// Raster height in pixels.
pub const HEIGHT: u32 = 480;

/// Background fill.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
/// Text color.
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Top-left corner of the index label.
pub const LABEL_ORIGIN: (u32, u32) = (10, 10);
/// Top-left corner of the timestamp line.
pub const TIMESTAMP_ORIGIN: (u32, u32) = (10, 30);

/// Width and height of one glyph cell.
pub const GLYPH_SIZE: u32 = 8;

/// Timestamp layout, e.g. `2024-05-01 13:45:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Label drawn on the first line.
#[must_use]
pub fn index_label(index: u64) -> String {
    format!("Test Image {index}")
}

/// Timestamp drawn on the second line.
#[must_use]
pub fn timestamp_label(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the annotated raster for one image.
#[must_use]
pub fn render_test_image(index: u64, at: NaiveDateTime) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    draw_text(&mut canvas, LABEL_ORIGIN, &index_label(index), INK);
    draw_text(&mut canvas, TIMESTAMP_ORIGIN, &timestamp_label(at), INK);
    canvas
}

/// Draw `text` with its top-left corner at `origin`.
///
/// Characters without a glyph advance the pen but leave no ink; pixels past
/// the canvas edge are clipped.
pub fn draw_text(canvas: &mut RgbImage, origin: (u32, u32), text: &str, color: Rgb<u8>) {
    let (mut pen_x, y) = origin;
    for ch in text.chars() {
        if let Some(rows) = BASIC_FONTS.get(ch) {
            draw_glyph(canvas, pen_x, y, &rows, color);
        }
        pen_x = pen_x.saturating_add(GLYPH_SIZE);
    }
}

fn draw_glyph(canvas: &mut RgbImage, x: u32, y: u32, rows: &[u8; 8], color: Rgb<u8>) {
    for (dy, row) in (0u32..).zip(rows) {
        for dx in 0..GLYPH_SIZE {
            // Bit 0 is the leftmost column.
            if row & (1 << dx) == 0 {
                continue;
            }
            let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
            if px < canvas.width() && py < canvas.height() {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}
