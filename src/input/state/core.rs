//! Drawing state machine and surface controller state.

use super::loading::PendingLoad;
use crate::config::{Config, ShareConfig};
use crate::draw::{Backdrop, Canvas, CanvasError, Color, PALETTE, Preview, palette_color};
use crate::history::UndoHistory;
use crate::input::coordinate::Point;
use crate::share::{self, ShareLink};
use crate::tools::{Tool, ToolBox, ToolKind};
use log::{debug, info, warn};

/// Current stroke state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not drawing, waiting for a press
    Idle,
    /// Pointer held down on the canvas
    Drawing {
        /// Where the stroke started (canvas-local, clamped)
        start: Point,
    },
}

/// Owns the canvas and everything that mutates it.
///
/// The controller receives pointer events, forwards them to the active tool,
/// records an undo snapshot before every stroke, and tracks image loads that
/// are still decoding in the background.
pub struct SurfaceController {
    /// The drawing surface
    pub(crate) canvas: Canvas,
    /// One instance of every tool plus the active selection
    pub(crate) tools: ToolBox,
    /// Palette entry applied to every tool on switch
    pub(crate) selected_color: Color,
    /// Data-URL snapshots taken before each stroke
    pub(crate) history: UndoHistory,
    /// Stroke state machine
    pub(crate) state: DrawingState,
    /// Last known pointer position (canvas-local, clamped)
    pub(crate) last_point: Point,
    /// Cursor overlay shown on the composed frame
    pub(crate) preview: Option<Preview>,
    /// Pixels captured at stroke start, used to abort the stroke
    pub(crate) stroke_backdrop: Option<Backdrop>,
    /// Canvas position in screen coordinates
    pub(crate) origin: Point,
    /// Share link settings
    pub(crate) share_config: ShareConfig,
    /// Most recent share link
    pub(crate) last_share: Option<ShareLink>,
    /// Loads issued but not yet applied, oldest first
    pub(crate) pending: Vec<PendingLoad>,
    pub(crate) next_load_id: u64,
    /// Bumped on every canvas mutation
    pub(crate) revision: u64,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl std::fmt::Debug for SurfaceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceController")
            .field("canvas", &self.canvas)
            .field("tool", &self.tools.active_kind())
            .field("color", &self.selected_color.code)
            .field("state", &self.state)
            .field("history", &self.history.len())
            .field("pending", &self.pending.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl SurfaceController {
    /// Creates a controller with a blank canvas sized from the config.
    pub fn from_config(config: &Config) -> Result<Self, CanvasError> {
        let canvas = Canvas::new(
            config.canvas.width,
            config.canvas.height,
            config.drawing.antialias,
        )?;

        let selected_color = palette_color(config.drawing.default_color_index).unwrap_or_else(|| {
            warn!(
                "default_color_index {} out of range, using {}",
                config.drawing.default_color_index, PALETTE[0].code
            );
            PALETTE[0]
        });
        let tools = ToolBox::new(selected_color, &config.tools, config.fill.tolerance);

        info!(
            "Surface ready: {}x{} canvas, tool {}, color {}",
            canvas.width(),
            canvas.height(),
            tools.active_kind(),
            selected_color.code
        );

        Ok(Self {
            canvas,
            tools,
            selected_color,
            history: UndoHistory::new(config.history.max_depth),
            state: DrawingState::Idle,
            last_point: Point::default(),
            preview: None,
            stroke_backdrop: None,
            origin: Point::new(config.canvas.origin_x, config.canvas.origin_y),
            share_config: config.share.clone(),
            last_share: None,
            pending: Vec::new(),
            next_load_id: 0,
            revision: 0,
            needs_redraw: true,
        })
    }

    /// Creates a controller with default settings and the given canvas size.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        let mut config = Config::default();
        config.canvas.width = width;
        config.canvas.height = height;
        Self::from_config(&config)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable canvas access, for pixel sampling.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn active_tool(&self) -> &Tool {
        self.tools.active()
    }

    pub fn active_tool_kind(&self) -> ToolKind {
        self.tools.active_kind()
    }

    /// Looks up any tool, active or not.
    pub fn tool(&self, kind: ToolKind) -> &Tool {
        self.tools.get(kind)
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    pub fn last_share(&self) -> Option<&ShareLink> {
        self.last_share.as_ref()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Moves the canvas on screen; later pointer events are translated by the new origin.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn share_config(&self) -> &ShareConfig {
        &self.share_config
    }

    /// Counter bumped every time the canvas pixels change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Serializes the current canvas into a data URL.
    pub fn snapshot(&self) -> Result<String, CanvasError> {
        let png = self.canvas.encode_png()?;
        Ok(share::encode_png(&png))
    }

    /// Records a canvas mutation.
    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.needs_redraw = true;
    }

    /// Clamps a canvas-local point into the canvas.
    pub(crate) fn clamp(&self, point: Point) -> Point {
        point.clamp_to(self.canvas.width(), self.canvas.height())
    }

    /// Rebuilds a visible preview after the tool, color or size changed.
    pub(crate) fn refresh_preview(&mut self) {
        if self.preview.is_some() {
            self.preview = Some(self.tools.active().preview(self.last_point));
        }
        self.needs_redraw = true;
    }

    /// Cancels the stroke in progress, if any.
    ///
    /// The canvas goes back to the pixels captured at stroke start and the undo
    /// entry pushed for the stroke is dropped. Returns true if a stroke was aborted.
    pub(crate) fn abort_stroke(&mut self) -> bool {
        if !self.is_drawing() {
            return false;
        }

        if let Err(err) = self.tools.active_mut().abort(&mut self.canvas) {
            warn!("Tool failed to abort cleanly: {err}");
        }
        if let Some(backdrop) = self.stroke_backdrop.take()
            && let Err(err) = self.canvas.restore(&backdrop)
        {
            log::error!("Failed to restore canvas after aborted stroke: {err}");
        }
        self.history.pop();
        self.state = DrawingState::Idle;
        self.touch();
        debug!("Aborted stroke with {}", self.tools.active_kind());
        true
    }
}
