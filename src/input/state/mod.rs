mod actions;
mod core;
mod loading;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{DrawingState, SurfaceController};
