//! Square eraser that clears pixels back to the blank canvas.

use super::size::SizeRange;
use crate::draw::{Canvas, CanvasError, Color, Preview, render};
use crate::input::coordinate::Point;

#[derive(Debug, Clone)]
pub struct Eraser {
    /// Only tints the footprint preview; erased pixels become transparent.
    pub color: Color,
    pub size: SizeRange,
}

impl Eraser {
    pub fn new(color: Color, size: SizeRange) -> Self {
        Self { color, size }
    }

    fn erase(&self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let size = self.size.current;
        canvas.draw(|ctx| render::erase_square(ctx, point, size))
    }

    pub fn start_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        self.erase(canvas, point)
    }

    pub fn on_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        self.erase(canvas, point)
    }

    pub fn on_end_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        self.erase(canvas, point)
    }

    pub fn preview(&self, point: Point) -> Preview {
        Preview::Square {
            center: point,
            size: self.size.current,
            color: self.color,
        }
    }
}
