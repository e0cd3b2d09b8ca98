//! Brush size bounds.

use serde::{Deserialize, Serialize};

/// Tool size with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
    pub current: f64,
}

impl SizeRange {
    /// Builds a range, clamping `current` into `[min, max]`.
    ///
    /// A non-finite `min` becomes 0 and a non-finite `max` collapses onto `min`.
    /// A non-finite `current` starts at `min`.
    pub fn new(min: f64, max: f64, current: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() { max.max(min) } else { min };
        let mut range = Self {
            min,
            max,
            current: min,
        };
        range.set(current);
        range
    }

    /// Sets the current size, clamped. Returns the applied value.
    pub fn set(&mut self, value: f64) -> f64 {
        self.current = if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        };
        self.current
    }
}
