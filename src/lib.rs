//! paintboard: a freehand paint surface with shareable canvases.
//!
//! The crate exposes the drawing engine used by the `paintboard` binary: a
//! Cairo-backed canvas, the ten-color palette, six drawing tools, a linear undo
//! history of PNG data-URL snapshots and share links that carry the whole canvas
//! in a query parameter. Hosts feed pointer events into
//! [`input::SurfaceController`] and composite its frames however they like.

pub mod config;
pub mod draw;
pub mod history;
pub mod input;
pub mod script;
pub mod share;
pub mod tools;
pub mod util;

pub use config::Config;
pub use input::SurfaceController;
