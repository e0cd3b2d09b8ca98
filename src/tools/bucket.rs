//! Paint bucket.

use super::size::SizeRange;
use crate::draw::{Canvas, CanvasError, Color, Preview, flood_fill};
use crate::input::coordinate::Point;

#[derive(Debug, Clone)]
pub struct PaintBucket {
    pub color: Color,
    /// Unused by the fill itself; kept so every tool exposes a size control.
    pub size: SizeRange,
    /// Maximum per-channel difference from the seed pixel still considered "same color".
    pub tolerance: u8,
}

impl PaintBucket {
    pub fn new(color: Color, size: SizeRange, tolerance: u8) -> Self {
        Self {
            color,
            size,
            tolerance,
        }
    }

    /// Fills from `point`; returns the number of pixels painted.
    pub fn on_end_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<usize, CanvasError> {
        let (x, y) = point.pixel();
        let fill = self.color.rgba();
        let tolerance = self.tolerance;
        let painted = canvas.with_pixels(|pixels| flood_fill(pixels, x, y, fill, tolerance))?;
        log::debug!("Bucket fill at ({x}, {y}) painted {painted} pixels");
        Ok(painted)
    }

    pub fn preview(&self, point: Point) -> Preview {
        Preview::Crosshair {
            center: point,
            color: self.color,
        }
    }
}
