//! Configuration type definitions.

use crate::tools::ToolKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas geometry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Screen X of the canvas' top-left corner; subtracted from pointer events
    #[serde(default)]
    pub origin_x: f64,

    /// Screen Y of the canvas' top-left corner; subtracted from pointer events
    #[serde(default)]
    pub origin_y: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

/// Drawing defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Palette entry selected at startup (0 - 9)
    #[serde(default)]
    pub default_color_index: usize,

    /// Smooth shape edges. Off by default so fills meet crisp, single-color borders.
    #[serde(default)]
    pub antialias: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color_index: 0,
            antialias: false,
        }
    }
}

/// Initial size of each tool. Values are clamped to the tool's own bounds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Solid circle minimum radius (1 - 30)
    #[serde(default = "default_circle_solid")]
    pub circle_solid: f64,

    /// Square outline line width (1 - 30)
    #[serde(default = "default_square_line")]
    pub square_line: f64,

    /// Solid square has no size; kept for symmetry (always 0)
    #[serde(default)]
    pub square_solid: f64,

    /// Free hand brush diameter (1 - 30)
    #[serde(default = "default_free_hand")]
    pub free_hand: f64,

    /// Eraser square side (1 - 500)
    #[serde(default = "default_eraser")]
    pub eraser: f64,

    /// Paint bucket size (1 - 500, unused by the fill)
    #[serde(default = "default_paint_bucket")]
    pub paint_bucket: f64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            circle_solid: default_circle_solid(),
            square_line: default_square_line(),
            square_solid: 0.0,
            free_hand: default_free_hand(),
            eraser: default_eraser(),
            paint_bucket: default_paint_bucket(),
        }
    }
}

impl ToolsConfig {
    /// Configured initial size for `kind`.
    pub fn initial_size(&self, kind: ToolKind) -> f64 {
        match kind {
            ToolKind::CircleSolid => self.circle_solid,
            ToolKind::SquareLine => self.square_line,
            ToolKind::SquareSolid => self.square_solid,
            ToolKind::FreeHand => self.free_hand,
            ToolKind::Eraser => self.eraser,
            ToolKind::PaintBucket => self.paint_bucket,
        }
    }

    pub(super) fn size_mut(&mut self, kind: ToolKind) -> &mut f64 {
        match kind {
            ToolKind::CircleSolid => &mut self.circle_solid,
            ToolKind::SquareLine => &mut self.square_line,
            ToolKind::SquareSolid => &mut self.square_solid,
            ToolKind::FreeHand => &mut self.free_hand,
            ToolKind::Eraser => &mut self.eraser,
            ToolKind::PaintBucket => &mut self.paint_bucket,
        }
    }
}

/// Paint bucket matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FillConfig {
    /// Maximum per-channel difference (0 - 255) from the clicked pixel that still
    /// counts as the same color. 0 fills exact matches only.
    #[serde(default)]
    pub tolerance: u8,
}

/// Undo history limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undo snapshots kept (0 = unlimited). Oldest entries go first.
    #[serde(default)]
    pub max_depth: usize,
}

/// Share link settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShareConfig {
    /// Page that consumes shared drawings
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Query parameter carrying the encoded canvas
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_param: default_query_param(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_circle_solid() -> f64 {
    5.0
}

fn default_square_line() -> f64 {
    3.0
}

fn default_free_hand() -> f64 {
    10.0
}

fn default_eraser() -> f64 {
    200.0
}

fn default_paint_bucket() -> f64 {
    200.0
}

pub(super) fn default_base_url() -> String {
    "http://localhost:4200/game".to_string()
}

pub(super) fn default_query_param() -> String {
    "source".to_string()
}
