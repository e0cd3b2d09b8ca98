//! Round-brush freehand pen.

use super::size::SizeRange;
use crate::draw::{Canvas, CanvasError, Color, Preview, render};
use crate::input::coordinate::Point;

#[derive(Debug, Clone)]
pub struct FreeHand {
    pub color: Color,
    pub size: SizeRange,
    last: Option<Point>,
}

impl FreeHand {
    pub fn new(color: Color, size: SizeRange) -> Self {
        Self {
            color,
            size,
            last: None,
        }
    }

    pub fn start_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let (color, width) = (self.color, self.size.current);
        canvas.draw(|ctx| render::render_dab(ctx, point, width, color))?;
        self.last = Some(point);
        Ok(())
    }

    pub fn on_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let (color, width) = (self.color, self.size.current);
        let from = self.last.unwrap_or(point);
        canvas.draw(|ctx| render::render_segment(ctx, from, point, width, color))?;
        self.last = Some(point);
        Ok(())
    }

    pub fn on_end_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let result = self.on_drawing(canvas, point);
        self.last = None;
        result
    }

    pub fn preview(&self, point: Point) -> Preview {
        Preview::Circle {
            center: point,
            radius: self.size.current / 2.0,
            color: self.color,
        }
    }

    pub fn abort(&mut self) {
        self.last = None;
    }
}
