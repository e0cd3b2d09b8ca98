//! Raster drawing primitives (Cairo-based).
//!
//! This module defines the pixel-level building blocks of the paint surface:
//! - [`Color`]: palette entries and the fixed ten-color [`PALETTE`]
//! - [`Canvas`]: the ARGB32 pixel buffer owned by the surface controller
//! - Rendering functions for dabs, segments, rectangles, circles and previews
//! - [`flood_fill`]: the paint-bucket fill

pub mod canvas;
pub mod color;
pub mod fill;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Backdrop, Canvas, CanvasError, DecodedImage, PixelBuffer};
pub use color::{Color, PALETTE, PALETTE_SIZE, Rgba, palette_color};
pub use fill::flood_fill;
pub use render::{Preview, render_preview};
