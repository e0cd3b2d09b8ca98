use crate::input::coordinate::Point;
use crate::input::events::{PointerEvent, PointerPhase};
use futures::executor::block_on;
use log::{debug, error, info};

use super::{DrawingState, SurfaceController};

impl SurfaceController {
    /// Dispatches a screen-space pointer event.
    ///
    /// The position is translated by the canvas origin before reaching the
    /// press/motion/release handlers.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        let point = event.canvas_point(self.origin);
        match event.phase {
            PointerPhase::Press => self.on_pointer_press(point),
            PointerPhase::Move => self.on_pointer_motion(point),
            PointerPhase::Release => self.on_pointer_release(point),
        }
    }

    /// Starts a stroke with the active tool.
    ///
    /// Loads still decoding are applied first, so the stroke lands on the loaded
    /// image and its undo snapshot holds that image. The canvas is then
    /// snapshotted into the undo history; if that fails the stroke does not start.
    pub fn on_pointer_press(&mut self, point: Point) {
        if self.is_drawing() {
            debug!("Ignoring press while a stroke is in progress");
            return;
        }
        if self.has_pending_load() {
            let applied = block_on(self.wait_for_pending());
            info!("Applied {applied} pending load(s) before starting a stroke");
        }
        let point = self.clamp(point);

        let snapshot = match self.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("Failed to snapshot canvas, stroke not started: {err}");
                return;
            }
        };
        let backdrop = match self.canvas.backdrop() {
            Ok(backdrop) => backdrop,
            Err(err) => {
                error!("Failed to capture canvas pixels, stroke not started: {err}");
                return;
            }
        };

        self.history.push(snapshot);
        self.stroke_backdrop = Some(backdrop);
        self.state = DrawingState::Drawing { start: point };
        self.last_point = point;

        if let Err(err) = self.tools.active_mut().start_drawing(&mut self.canvas, point) {
            error!("{} failed to start drawing: {err}", self.tools.active_kind());
        }
        self.touch();
        debug!(
            "Stroke started with {} at ({:.1}, {:.1})",
            self.tools.active_kind(),
            point.x,
            point.y
        );
    }

    /// Updates the cursor preview and extends the active stroke.
    ///
    /// The preview is hidden while the pointer is outside the canvas; a stroke
    /// in progress keeps drawing at the clamped position.
    pub fn on_pointer_motion(&mut self, point: Point) {
        let inside = point.is_within(self.canvas.width(), self.canvas.height());
        let point = self.clamp(point);
        self.last_point = point;
        self.preview = inside.then(|| self.tools.active().preview(point));
        self.needs_redraw = true;

        if self.is_drawing() {
            if let Err(err) = self.tools.active_mut().on_drawing(&mut self.canvas, point) {
                error!("{} failed to draw: {err}", self.tools.active_kind());
            }
            self.touch();
        }
    }

    /// Finishes the active stroke. Releases without a stroke are ignored.
    pub fn on_pointer_release(&mut self, point: Point) {
        if !self.is_drawing() {
            return;
        }
        let point = self.clamp(point);
        self.last_point = point;

        if let Err(err) = self.tools.active_mut().on_end_drawing(&mut self.canvas, point) {
            error!("{} failed to finish drawing: {err}", self.tools.active_kind());
        }
        self.state = DrawingState::Idle;
        self.stroke_backdrop = None;
        self.touch();
        debug!(
            "Stroke finished with {} at ({:.1}, {:.1})",
            self.tools.active_kind(),
            point.x,
            point.y
        );
    }
}
