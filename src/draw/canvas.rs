//! The canvas pixel buffer.
//!
//! [`Canvas`] wraps a Cairo ARGB32 image surface. Drawing goes through short-lived
//! Cairo contexts created per operation so the surface stays exclusively owned and
//! its pixel data can be borrowed for sampling, flood fills and backdrops.

use super::color::Rgba;
use std::io::Cursor;
use thiserror::Error;

/// Errors raised by canvas pixel operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Canvas pixels are borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Raw copy of the canvas pixels, used to restore the surface without a codec round-trip.
#[derive(Clone)]
pub struct Backdrop {
    data: Vec<u8>,
    width: i32,
    height: i32,
    stride: i32,
}

impl std::fmt::Debug for Backdrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backdrop")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Decoded raster pixels that can be handed between threads.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: i32,
    pub height: i32,
    pub stride: i32,
    pub format: cairo::Format,
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Decodes PNG bytes into plain pixel data.
    pub fn from_png(bytes: &[u8]) -> Result<Self, CanvasError> {
        let mut surface = cairo::ImageSurface::create_from_png(&mut Cursor::new(bytes))?;
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride();
        let format = surface.format();
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }
}

/// Mutable view over the canvas' premultiplied ARGB32 words.
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: i32,
    height: i32,
    stride: i32,
}

impl PixelBuffer<'_> {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride as usize + x as usize * 4)
    }

    /// Reads the raw ARGB32 word at `(x, y)`.
    pub fn word(&self, x: i32, y: i32) -> Option<u32> {
        let o = self.offset(x, y)?;
        let d = &self.data;
        Some(u32::from_ne_bytes([d[o], d[o + 1], d[o + 2], d[o + 3]]))
    }

    /// Writes the raw ARGB32 word at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_word(&mut self, x: i32, y: i32, word: u32) {
        if let Some(o) = self.offset(x, y) {
            self.data[o..o + 4].copy_from_slice(&word.to_ne_bytes());
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.word(x, y).map(Rgba::from_argb32)
    }
}

/// The drawing surface owned by the surface controller.
pub struct Canvas {
    surface: cairo::ImageSurface,
    antialias: bool,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("antialias", &self.antialias)
            .finish()
    }
}

impl Canvas {
    /// Creates a blank (fully transparent) canvas.
    pub fn new(width: i32, height: i32, antialias: bool) -> Result<Self, CanvasError> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface, antialias })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Underlying surface, for compositing onto another context.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Runs `draw` against a fresh Cairo context on the canvas.
    ///
    /// The context is dropped before returning so pixel access stays available.
    pub fn draw<F>(&mut self, draw: F) -> Result<(), CanvasError>
    where
        F: FnOnce(&cairo::Context),
    {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_antialias(if self.antialias {
            cairo::Antialias::Default
        } else {
            cairo::Antialias::None
        });
        draw(&ctx);
        drop(ctx);
        self.surface.flush();
        Ok(())
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) -> Result<(), CanvasError> {
        self.draw(|ctx| {
            ctx.set_operator(cairo::Operator::Clear);
            let _ = ctx.paint();
        })
    }

    /// Runs `f` with mutable access to the raw pixel words.
    pub fn with_pixels<R>(
        &mut self,
        f: impl FnOnce(&mut PixelBuffer<'_>) -> R,
    ) -> Result<R, CanvasError> {
        let width = self.surface.width();
        let height = self.surface.height();
        let stride = self.surface.stride();
        self.surface.flush();
        let mut data = self.surface.data()?;
        let mut buffer = PixelBuffer {
            data: &mut data[..],
            width,
            height,
            stride,
        };
        Ok(f(&mut buffer))
    }

    /// Samples the pixel at `(x, y)`; `None` when outside the canvas or when the
    /// pixels cannot be borrowed.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<Rgba> {
        match self.with_pixels(|pixels| pixels.pixel(x, y)) {
            Ok(px) => px,
            Err(err) => {
                log::warn!("Failed to sample canvas pixel ({x}, {y}): {err}");
                None
            }
        }
    }

    /// Returns true if every pixel is transparent.
    pub fn is_blank(&mut self) -> bool {
        self.with_pixels(|pixels| pixels.data.iter().all(|byte| *byte == 0))
            .unwrap_or(false)
    }

    /// Copies the current pixels.
    pub fn backdrop(&mut self) -> Result<Backdrop, CanvasError> {
        let width = self.width();
        let height = self.height();
        let stride = self.surface.stride();
        self.surface.flush();
        let data = self.surface.data()?.to_vec();
        Ok(Backdrop {
            data,
            width,
            height,
            stride,
        })
    }

    /// Replaces the pixels with a previously captured backdrop.
    pub fn restore(&mut self, backdrop: &Backdrop) -> Result<(), CanvasError> {
        if backdrop.width != self.width()
            || backdrop.height != self.height()
            || backdrop.stride != self.surface.stride()
        {
            log::warn!(
                "Ignoring backdrop of {}x{} for {}x{} canvas",
                backdrop.width,
                backdrop.height,
                self.width(),
                self.height()
            );
            return Ok(());
        }
        self.surface.flush();
        let mut data = self.surface.data()?;
        data.copy_from_slice(&backdrop.data);
        Ok(())
    }

    /// Encodes the canvas as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.surface.flush();
        let mut bytes = Vec::new();
        self.surface.write_to_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Replaces the canvas pixels with the decoded image, anchored at the top-left corner.
    pub fn blit(&mut self, image: &DecodedImage) -> Result<(), CanvasError> {
        let source = cairo::ImageSurface::create_for_data(
            image.data.clone(),
            image.format,
            image.width,
            image.height,
            image.stride,
        )?;
        self.draw(|ctx| {
            ctx.set_operator(cairo::Operator::Source);
            if ctx.set_source_surface(&source, 0.0, 0.0).is_ok() {
                let _ = ctx.paint();
            }
        })
    }
}
