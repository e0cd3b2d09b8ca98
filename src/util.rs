//! Geometry helpers shared by tools and renderers.

use crate::input::coordinate::Point;

/// Normalizes the rectangle spanned by two corners into `(x, y, width, height)`
/// with non-negative extents, regardless of drag direction.
pub fn span_rect(a: Point, b: Point) -> (f64, f64, f64, f64) {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    (x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
}

/// Radius of a solid circle anchored at `anchor` and dragged to `current`,
/// never smaller than `min_radius`.
pub fn circle_radius(anchor: Point, current: Point, min_radius: f64) -> f64 {
    anchor.distance_to(current).max(min_radius)
}
