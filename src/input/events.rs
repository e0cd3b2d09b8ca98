//! Pointer event types delivered by the hosting UI.

use super::coordinate::{Point, relative_point};
use serde::{Deserialize, Serialize};

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerPhase {
    /// Button pressed (stroke start)
    Press,
    /// Pointer moved, with or without a button held
    Move,
    /// Button released (stroke end)
    Release,
}

/// A raw pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, screen_x: f64, screen_y: f64) -> Self {
        Self {
            phase,
            screen_x,
            screen_y,
        }
    }

    /// Position of the event relative to a canvas whose top-left corner sits at `origin`.
    pub fn canvas_point(&self, origin: Point) -> Point {
        relative_point(self.screen_x, self.screen_y, origin)
    }
}
