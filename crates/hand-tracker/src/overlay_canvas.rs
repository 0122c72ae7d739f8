//! Software-rasterized overlay surface.
//!
//! Renders the skeleton into an RGBA buffer over a transparent background so
//! the overlay can be saved and composited onto video frames later.

use crate::{AppError, AppResult};

use hand_tracker_core::{Canvas, Color, Point};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{info, instrument};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Glyph cell size of the built-in digit font.
const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

/// 3x5 bitmaps for '0'..='9', one row per entry, bit 2 is the left column.
const DIGIT_GLYPHS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// [`Canvas`] backed by an in-memory RGBA image.
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    /// Rendered pixels.
    #[cfg(test)]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the current overlay as a PNG.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_png(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| AppError::OverlayError {
                reason: format!("Failed to write overlay PNG: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(path = ?path, "Overlay saved");

        Ok(())
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.image.width() && y < self.image.height() {
            self.image
                .put_pixel(x, y, Rgba([color.r, color.g, color.b, 0xff]));
        }
    }

    fn draw_glyph(&mut self, glyph: &[u8; 5], left: i64, top: i64, color: Color) {
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b100u8 >> col) != 0 {
                    self.put(
                        left.saturating_add(i64::from(col)),
                        top.saturating_add(row as i64),
                        color,
                    );
                }
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::from_pixel(width, height, TRANSPARENT);
    }

    fn clear(&mut self) {
        self.image.pixels_mut().for_each(|px| *px = TRANSPARENT);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, line_width: f32) {
        if !(is_finite(from) && is_finite(to)) {
            return;
        }

        // Half-pixel stamps, bounded by the canvas perimeter.
        let max_steps = self
            .image
            .width()
            .saturating_add(self.image.height())
            .max(1)
            .saturating_mul(2);
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let span = (dx.abs().max(dy.abs()) * 2.0).ceil();
        let steps = if span.is_finite() {
            (span as u32).clamp(2, max_steps)
        } else {
            max_steps
        };
        let radius = (line_width / 2.0).max(0.5);

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.fill_circle(
                Point::new(from.x + dx * t, from.y + dy * t),
                radius,
                color,
            );
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if !is_finite(center) || !radius.is_finite() {
            return;
        }

        let r = radius.max(0.0);
        let (max_x, max_y) = (
            i64::from(self.image.width()) - 1,
            i64::from(self.image.height()) - 1,
        );
        let min_x = ((center.x - r).floor() as i64).max(0);
        let min_y = ((center.y - r).floor() as i64).max(0);
        let end_x = ((center.x + r).ceil() as i64).min(max_x);
        let end_y = ((center.y + r).ceil() as i64).min(max_y);

        for y in min_y..=end_y {
            for x in min_x..=end_x {
                let (px, py) = (x as f32 + 0.5 - center.x, y as f32 + 0.5 - center.y);
                if px * px + py * py <= r * r {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, at: Point, color: Color) {
        if !is_finite(at) {
            return;
        }

        let top = (at.y.round() as i64).saturating_sub(i64::from(GLYPH_HEIGHT));
        let mut left = at.x.round() as i64;

        for ch in text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                self.draw_glyph(&DIGIT_GLYPHS[digit as usize], left, top, color);
            }
            left = left.saturating_add(i64::from(GLYPH_WIDTH) + 1);
        }
    }
}

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
