//! Anchored shape tools: square outline, solid square and solid circle.
//!
//! A shape stroke records its anchor and a backdrop of the canvas on press.
//! Every pointer move restores the backdrop and redraws the shape up to the
//! pointer, so the live preview never leaves trails behind.

use super::size::SizeRange;
use crate::draw::{Backdrop, Canvas, CanvasError, Color, Preview, render};
use crate::input::coordinate::Point;
use crate::util;

/// Geometry drawn by a [`ShapeTool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Rectangle outline from anchor to pointer, line width = size
    SquareLine,
    /// Filled rectangle from anchor to pointer
    SquareSolid,
    /// Filled circle centered on the anchor; size is the minimum radius
    CircleSolid,
}

#[derive(Debug, Clone)]
struct AnchoredStroke {
    anchor: Point,
    backdrop: Backdrop,
}

#[derive(Debug, Clone)]
pub struct ShapeTool {
    pub shape: ShapeKind,
    pub color: Color,
    pub size: SizeRange,
    stroke: Option<AnchoredStroke>,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind, color: Color, size: SizeRange) -> Self {
        Self {
            shape,
            color,
            size,
            stroke: None,
        }
    }

    /// Anchor of the stroke in progress, if any.
    pub fn anchor(&self) -> Option<Point> {
        self.stroke.as_ref().map(|stroke| stroke.anchor)
    }

    fn render(&self, ctx: &cairo::Context, anchor: Point, point: Point) {
        let size = self.size.current;
        match self.shape {
            ShapeKind::SquareLine => {
                render::render_rect_outline(ctx, anchor, point, size, self.color)
            }
            ShapeKind::SquareSolid => render::render_rect_filled(ctx, anchor, point, self.color),
            ShapeKind::CircleSolid => {
                let radius = util::circle_radius(anchor, point, size);
                render::render_circle_filled(ctx, anchor, radius, self.color)
            }
        }
    }

    fn redraw(&self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let Some(stroke) = &self.stroke else {
            return Ok(());
        };
        canvas.restore(&stroke.backdrop)?;
        let anchor = stroke.anchor;
        canvas.draw(|ctx| self.render(ctx, anchor, point))
    }

    pub fn start_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let backdrop = canvas.backdrop()?;
        self.stroke = Some(AnchoredStroke {
            anchor: point,
            backdrop,
        });
        Ok(())
    }

    pub fn on_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        self.redraw(canvas, point)
    }

    pub fn on_end_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        let result = self.redraw(canvas, point);
        self.stroke = None;
        result
    }

    /// Solid circles show the minimum dot; the square tools show a crosshair.
    pub fn preview(&self, point: Point) -> Preview {
        match self.shape {
            ShapeKind::CircleSolid => Preview::Circle {
                center: point,
                radius: self.size.current,
                color: self.color,
            },
            ShapeKind::SquareLine | ShapeKind::SquareSolid => Preview::Crosshair {
                center: point,
                color: self.color,
            },
        }
    }

    /// Drops the stroke in progress and puts the pre-stroke pixels back.
    pub fn abort(&mut self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        match self.stroke.take() {
            Some(stroke) => canvas.restore(&stroke.backdrop),
            None => Ok(()),
        }
    }
}
