//! Pointer input and the surface controller.
//!
//! This module translates host pointer events into tool calls. Screen positions
//! are converted to canvas-local points, and [`SurfaceController`] runs the
//! stroke state machine, the undo history and background image loads.

pub mod coordinate;
pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use coordinate::{Point, relative_point};
pub use events::{PointerEvent, PointerPhase};
pub use state::{DrawingState, SurfaceController};
