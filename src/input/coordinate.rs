//! Canvas-local coordinates.

use serde::{Deserialize, Serialize};

/// A pointer position relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns true if the point lies on a pixel of a `width`×`height` canvas.
    pub fn is_within(self, width: i32, height: i32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x < width as f64 && self.y < height as f64
    }

    /// Clamps the point onto the canvas area. Non-finite coordinates collapse to 0.
    pub fn clamp_to(self, width: i32, height: i32) -> Point {
        let clamp_axis = |v: f64, extent: i32| {
            if !v.is_finite() {
                return 0.0;
            }
            let max = (extent.max(1) - 1) as f64;
            v.clamp(0.0, max)
        };
        Point {
            x: clamp_axis(self.x, width),
            y: clamp_axis(self.y, height),
        }
    }

    /// Integer pixel coordinates containing this point.
    pub fn pixel(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Converts a screen-space pointer position into canvas-local coordinates by
/// subtracting the canvas' on-screen origin.
pub fn relative_point(screen_x: f64, screen_y: f64, origin: Point) -> Point {
    Point {
        x: screen_x - origin.x,
        y: screen_y - origin.y,
    }
}
