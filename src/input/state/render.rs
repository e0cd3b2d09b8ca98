use crate::draw::{CanvasError, render_preview};

use super::SurfaceController;

impl SurfaceController {
    /// Paints the canvas and the cursor preview onto a display context.
    ///
    /// The preview only ever lands on `ctx`; canvas pixels are left alone.
    pub fn render_frame(&self, ctx: &cairo::Context) -> Result<(), CanvasError> {
        ctx.set_source_surface(self.canvas.surface(), 0.0, 0.0)?;
        ctx.paint()?;
        // Drop the source pattern so the canvas surface is exclusively owned again.
        ctx.set_source_rgba(0.0, 0.0, 0.0, 0.0);
        if let Some(preview) = &self.preview {
            render_preview(ctx, preview);
        }
        Ok(())
    }

    /// Returns a new surface holding the canvas plus the current preview.
    pub fn compose_frame(&self) -> Result<cairo::ImageSurface, CanvasError> {
        let frame = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.canvas.width(),
            self.canvas.height(),
        )?;
        {
            let ctx = cairo::Context::new(&frame)?;
            self.render_frame(&ctx)?;
        }
        frame.flush();
        Ok(frame)
    }
}
