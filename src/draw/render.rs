//! Cairo-based drawing primitives used by the tools.

use super::color::Color;
use crate::input::coordinate::Point;
use crate::util;

/// Cursor affordance drawn over the canvas without touching its pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    /// Round brush outline
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    /// Square footprint (eraser)
    Square {
        center: Point,
        size: f64,
        color: Color,
    },
    /// Thin crosshair for shape and fill tools
    Crosshair { center: Point, color: Color },
}

const CROSSHAIR_ARM: f64 = 6.0;

/// Paints a filled round dab of the given diameter.
pub fn render_dab(ctx: &cairo::Context, center: Point, diameter: f64, color: Color) {
    if diameter <= 0.0 {
        return;
    }
    color.apply(ctx);
    ctx.new_path();
    ctx.arc(
        center.x,
        center.y,
        diameter / 2.0,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    let _ = ctx.fill();
}

/// Paints a round-capped segment between two points.
pub fn render_segment(ctx: &cairo::Context, from: Point, to: Point, width: f64, color: Color) {
    if width <= 0.0 {
        return;
    }
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.new_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Clears a `size`×`size` square centered on `center` back to transparent.
pub fn erase_square(ctx: &cairo::Context, center: Point, size: f64) {
    if size <= 0.0 {
        return;
    }
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    ctx.new_path();
    ctx.rectangle(center.x - size / 2.0, center.y - size / 2.0, size, size);
    let _ = ctx.fill();
    let _ = ctx.restore();
}

/// Strokes the outline of the rectangle spanned by two corners.
pub fn render_rect_outline(ctx: &cairo::Context, a: Point, b: Point, width: f64, color: Color) {
    if width <= 0.0 {
        return;
    }
    let (x, y, w, h) = util::span_rect(a, b);
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.new_path();
    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Fills the rectangle spanned by two corners.
pub fn render_rect_filled(ctx: &cairo::Context, a: Point, b: Point, color: Color) {
    let (x, y, w, h) = util::span_rect(a, b);
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    color.apply(ctx);
    ctx.new_path();
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();
}

/// Fills a circle of the given radius.
pub fn render_circle_filled(ctx: &cairo::Context, center: Point, radius: f64, color: Color) {
    render_dab(ctx, center, radius * 2.0, color);
}

/// Draws a preview overlay. Callers pass a context on a display surface, never the canvas.
pub fn render_preview(ctx: &cairo::Context, preview: &Preview) {
    let _ = ctx.save();
    ctx.set_line_width(1.0);
    ctx.new_path();
    match *preview {
        Preview::Circle {
            center,
            radius,
            color,
        } => {
            color.apply(ctx);
            ctx.arc(
                center.x,
                center.y,
                radius.max(0.5),
                0.0,
                std::f64::consts::PI * 2.0,
            );
            let _ = ctx.stroke();
        }
        Preview::Square {
            center,
            size,
            color,
        } => {
            color.apply(ctx);
            ctx.rectangle(center.x - size / 2.0, center.y - size / 2.0, size, size);
            let _ = ctx.stroke();
        }
        Preview::Crosshair { center, color } => {
            color.apply(ctx);
            ctx.move_to(center.x - CROSSHAIR_ARM, center.y);
            ctx.line_to(center.x + CROSSHAIR_ARM, center.y);
            ctx.move_to(center.x, center.y - CROSSHAIR_ARM);
            ctx.line_to(center.x, center.y + CROSSHAIR_ARM);
            let _ = ctx.stroke();
        }
    }
    let _ = ctx.restore();
}
