//! Drawing tools.
//!
//! Tools form a closed set of strategies. [`ToolKind`] is the tag used for
//! selection; [`Tool`] holds each variant's own parameters (color, size,
//! in-progress stroke) and dispatches pointer callbacks with a `match`.
//! Every callback borrows the [`Canvas`] for the duration of the call only.

pub mod bucket;
pub mod eraser;
pub mod freehand;
pub mod shapes;
pub mod size;

pub use bucket::PaintBucket;
pub use eraser::Eraser;
pub use freehand::FreeHand;
pub use shapes::{ShapeKind, ShapeTool};
pub use size::SizeRange;

use crate::config::ToolsConfig;
use crate::draw::{Canvas, CanvasError, Color, Preview};
use crate::input::coordinate::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from tool and palette selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Palette index {index} out of range (palette has {len} colors)")]
    PaletteIndex { index: usize, len: usize },
}

/// Tool selection tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    CircleSolid,
    SquareLine,
    SquareSolid,
    FreeHand,
    Eraser,
    PaintBucket,
}

impl ToolKind {
    /// All tools in tool-bar order.
    pub const ALL: [ToolKind; 6] = [
        ToolKind::CircleSolid,
        ToolKind::SquareLine,
        ToolKind::SquareSolid,
        ToolKind::FreeHand,
        ToolKind::Eraser,
        ToolKind::PaintBucket,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::CircleSolid => "Solid circle",
            ToolKind::SquareLine => "Square outline",
            ToolKind::SquareSolid => "Solid square",
            ToolKind::FreeHand => "Free hand",
            ToolKind::Eraser => "Eraser",
            ToolKind::PaintBucket => "Paint bucket",
        }
    }

    /// Size bounds `(min, max)` for this tool.
    pub fn size_bounds(self) -> (f64, f64) {
        match self {
            ToolKind::CircleSolid | ToolKind::SquareLine | ToolKind::FreeHand => (1.0, 30.0),
            ToolKind::SquareSolid => (0.0, 0.0),
            ToolKind::Eraser | ToolKind::PaintBucket => (1.0, 500.0),
        }
    }

    fn index(self) -> usize {
        match self {
            ToolKind::CircleSolid => 0,
            ToolKind::SquareLine => 1,
            ToolKind::SquareSolid => 2,
            ToolKind::FreeHand => 3,
            ToolKind::Eraser => 4,
            ToolKind::PaintBucket => 5,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawing tool with its own parameters and stroke state.
#[derive(Debug, Clone)]
pub enum Tool {
    FreeHand(FreeHand),
    Eraser(Eraser),
    Shape(ShapeTool),
    PaintBucket(PaintBucket),
}

impl Tool {
    /// Builds the tool for `kind` with the given color, initial size and fill tolerance.
    pub fn new(kind: ToolKind, color: Color, size: f64, tolerance: u8) -> Self {
        let (min, max) = kind.size_bounds();
        let size = SizeRange::new(min, max, size);
        match kind {
            ToolKind::FreeHand => Tool::FreeHand(FreeHand::new(color, size)),
            ToolKind::Eraser => Tool::Eraser(Eraser::new(color, size)),
            ToolKind::SquareLine => Tool::Shape(ShapeTool::new(ShapeKind::SquareLine, color, size)),
            ToolKind::SquareSolid => {
                Tool::Shape(ShapeTool::new(ShapeKind::SquareSolid, color, size))
            }
            ToolKind::CircleSolid => {
                Tool::Shape(ShapeTool::new(ShapeKind::CircleSolid, color, size))
            }
            ToolKind::PaintBucket => Tool::PaintBucket(PaintBucket::new(color, size, tolerance)),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::FreeHand(_) => ToolKind::FreeHand,
            Tool::Eraser(_) => ToolKind::Eraser,
            Tool::Shape(tool) => match tool.shape {
                ShapeKind::SquareLine => ToolKind::SquareLine,
                ShapeKind::SquareSolid => ToolKind::SquareSolid,
                ShapeKind::CircleSolid => ToolKind::CircleSolid,
            },
            Tool::PaintBucket(_) => ToolKind::PaintBucket,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Tool::FreeHand(tool) => tool.color,
            Tool::Eraser(tool) => tool.color,
            Tool::Shape(tool) => tool.color,
            Tool::PaintBucket(tool) => tool.color,
        }
    }

    pub fn size(&self) -> &SizeRange {
        match self {
            Tool::FreeHand(tool) => &tool.size,
            Tool::Eraser(tool) => &tool.size,
            Tool::Shape(tool) => &tool.size,
            Tool::PaintBucket(tool) => &tool.size,
        }
    }

    fn size_mut(&mut self) -> &mut SizeRange {
        match self {
            Tool::FreeHand(tool) => &mut tool.size,
            Tool::Eraser(tool) => &mut tool.size,
            Tool::Shape(tool) => &mut tool.size,
            Tool::PaintBucket(tool) => &mut tool.size,
        }
    }

    /// Updates the drawing color for subsequent operations.
    pub fn set_color(&mut self, color: Color) {
        match self {
            Tool::FreeHand(tool) => tool.color = color,
            Tool::Eraser(tool) => tool.color = color,
            Tool::Shape(tool) => tool.color = color,
            Tool::PaintBucket(tool) => tool.color = color,
        }
    }

    /// Sets the tool size, clamped to its bounds. Returns the applied size.
    pub fn set_size(&mut self, value: f64) -> f64 {
        self.size_mut().set(value)
    }

    pub fn start_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        match self {
            Tool::FreeHand(tool) => tool.start_drawing(canvas, point),
            Tool::Eraser(tool) => tool.start_drawing(canvas, point),
            Tool::Shape(tool) => tool.start_drawing(canvas, point),
            Tool::PaintBucket(_) => Ok(()),
        }
    }

    pub fn on_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        match self {
            Tool::FreeHand(tool) => tool.on_drawing(canvas, point),
            Tool::Eraser(tool) => tool.on_drawing(canvas, point),
            Tool::Shape(tool) => tool.on_drawing(canvas, point),
            Tool::PaintBucket(_) => Ok(()),
        }
    }

    pub fn on_end_drawing(&mut self, canvas: &mut Canvas, point: Point) -> Result<(), CanvasError> {
        match self {
            Tool::FreeHand(tool) => tool.on_end_drawing(canvas, point),
            Tool::Eraser(tool) => tool.on_end_drawing(canvas, point),
            Tool::Shape(tool) => tool.on_end_drawing(canvas, point),
            Tool::PaintBucket(tool) => tool.on_end_drawing(canvas, point).map(|_| ()),
        }
    }

    /// Cursor affordance for `point`; never touches the canvas.
    pub fn preview(&self, point: Point) -> Preview {
        match self {
            Tool::FreeHand(tool) => tool.preview(point),
            Tool::Eraser(tool) => tool.preview(point),
            Tool::Shape(tool) => tool.preview(point),
            Tool::PaintBucket(tool) => tool.preview(point),
        }
    }

    /// Drops any in-progress stroke state without committing it.
    pub fn abort(&mut self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        match self {
            Tool::FreeHand(tool) => {
                tool.abort();
                Ok(())
            }
            Tool::Shape(tool) => tool.abort(canvas),
            Tool::Eraser(_) | Tool::PaintBucket(_) => Ok(()),
        }
    }
}

/// One instance of every tool plus the active selection.
///
/// Tools keep their own sizes across switches; color is re-applied on switch.
#[derive(Debug, Clone)]
pub struct ToolBox {
    tools: Vec<Tool>,
    active: ToolKind,
}

impl ToolBox {
    pub fn new(color: Color, config: &ToolsConfig, tolerance: u8) -> Self {
        let tools = ToolKind::ALL
            .iter()
            .map(|&kind| Tool::new(kind, color, config.initial_size(kind), tolerance))
            .collect();
        Self {
            tools,
            active: ToolKind::ALL[0],
        }
    }

    pub fn active_kind(&self) -> ToolKind {
        self.active
    }

    pub fn active(&self) -> &Tool {
        &self.tools[self.active.index()]
    }

    pub fn active_mut(&mut self) -> &mut Tool {
        &mut self.tools[self.active.index()]
    }

    pub fn get(&self, kind: ToolKind) -> &Tool {
        &self.tools[kind.index()]
    }

    /// Switches the active tool. Callers abort any stroke first.
    pub fn select(&mut self, kind: ToolKind) {
        self.active = kind;
    }
}
