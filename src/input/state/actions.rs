use crate::draw::{Color, PALETTE_SIZE, palette_color};
use crate::share::{self, ShareError, ShareLink};
use crate::tools::{ToolError, ToolKind};
use log::{debug, error, info, warn};

use super::SurfaceController;

impl SurfaceController {
    /// Switches the active tool.
    ///
    /// A stroke in progress is aborted: its pixels are rolled back and its undo
    /// entry is dropped. The selected color is re-applied to the new tool.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if self.abort_stroke() {
            info!("Stroke aborted by switch to {kind}");
        }
        self.tools.select(kind);
        self.tools.active_mut().set_color(self.selected_color);
        self.refresh_preview();
        debug!("Active tool: {kind}");
    }

    /// Selects a palette entry by index.
    pub fn set_color(&mut self, index: usize) -> Result<Color, ToolError> {
        let color = palette_color(index).ok_or(ToolError::PaletteIndex {
            index,
            len: PALETTE_SIZE,
        })?;
        self.set_color_value(color);
        Ok(color)
    }

    /// Selects a color directly and applies it to the active tool.
    pub fn set_color_value(&mut self, color: Color) {
        self.selected_color = color;
        self.tools.active_mut().set_color(color);
        self.refresh_preview();
        debug!("Selected color {}", color.code);
    }

    /// Sets the active tool's size, clamped to its range. Returns the applied size.
    pub fn set_size(&mut self, value: f64) -> f64 {
        let applied = self.tools.active_mut().set_size(value);
        if applied != value {
            debug!(
                "Size {value} clamped to {applied} for {}",
                self.tools.active_kind()
            );
        }
        self.refresh_preview();
        applied
    }

    /// Reverts the most recent stroke.
    ///
    /// A stroke still in progress is rolled back directly. Otherwise the latest
    /// snapshot is popped and loaded, which completes asynchronously (see
    /// [`SurfaceController::poll_pending`]). Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        if self.abort_stroke() {
            info!("Undo rolled back the stroke in progress");
            return true;
        }

        let Some(snapshot) = self.history.pop() else {
            debug!("Nothing to undo");
            return false;
        };

        match self.load_from_source(&snapshot) {
            Ok(()) => {
                info!("Undo: {} snapshot(s) left", self.history.len());
                true
            }
            Err(err) => {
                error!("Undo snapshot could not be decoded: {err}");
                false
            }
        }
    }

    /// Blanks the canvas and discards the undo history.
    pub fn clear(&mut self) {
        self.abort_stroke();
        self.history.clear();
        if let Err(err) = self.canvas.clear() {
            error!("Failed to clear canvas: {err}");
        }
        if !self.pending.is_empty() {
            warn!(
                "Canvas cleared with {} load(s) still decoding; they will draw when done",
                self.pending.len()
            );
        }
        self.touch();
        info!("Canvas cleared");
    }

    /// Encodes the canvas into a share link and remembers it as the last share.
    pub fn share(&mut self) -> Result<ShareLink, ShareError> {
        let data_url = self.snapshot()?;
        let link = share::build_share_link(
            &self.share_config.base_url,
            &self.share_config.query_param,
            data_url,
        )?;
        info!("Share link ready ({} bytes)", link.as_str().len());
        self.last_share = Some(link.clone());
        Ok(link)
    }

    /// Shares the canvas and copies the link to the clipboard.
    pub fn share_to_clipboard(&mut self) -> Result<ShareLink, ShareError> {
        let link = self.share()?;
        share::clipboard::copy_text(link.as_str())?;
        Ok(link)
    }
}
