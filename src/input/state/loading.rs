//! Loading serialized canvases.
//!
//! Decoding a PNG runs on a worker thread and reports back through a oneshot
//! channel. The canvas is blanked as soon as a load is issued; the decoded
//! pixels replace the canvas once the event loop picks up the completion through
//! [`SurfaceController::poll_pending`] or [`SurfaceController::wait_for_pending`].
//!
//! Loads are never cancelled. A clear or undo made while a decode is in flight
//! is overwritten when that decode lands, and the last load applied wins. A
//! pointer press applies outstanding loads before the stroke starts.

use crate::draw::{Backdrop, DecodedImage};
use crate::share::{self, DecodeError};
use futures::channel::oneshot;
use futures::future;
use log::{debug, error, info, warn};
use std::thread;

use super::SurfaceController;

type DecodeResult = Result<DecodedImage, DecodeError>;

/// A load whose PNG is still decoding.
pub(crate) struct PendingLoad {
    id: u64,
    receiver: oneshot::Receiver<DecodeResult>,
    /// Pixels that were blanked when the load was issued
    backup: Option<Backdrop>,
    /// Canvas revision right after the blank
    revision: u64,
}

impl SurfaceController {
    /// Replaces the canvas with the image encoded in `source`.
    ///
    /// `source` is a `data:image/png;base64,` URL or bare base64. The envelope
    /// is validated immediately: malformed input returns an error and leaves the
    /// canvas untouched. Otherwise the canvas is blanked and the PNG decodes in
    /// the background.
    pub fn load_from_source(&mut self, source: &str) -> Result<(), DecodeError> {
        let png = share::decode_data_url(source)?;
        let png_len = png.len();

        let backup = match self.canvas.backdrop() {
            Ok(backup) => Some(backup),
            Err(err) => {
                warn!("Could not back up canvas before load: {err}");
                None
            }
        };
        if let Err(err) = self.canvas.clear() {
            error!("Failed to blank canvas for load: {err}");
        }
        self.touch();

        let id = self.next_load_id;
        self.next_load_id += 1;
        let (sender, receiver) = oneshot::channel();

        let spawned = thread::Builder::new()
            .name(format!("paintboard-decode-{id}"))
            .spawn(move || {
                let decoded = DecodedImage::from_png(&png)
                    .map_err(|err| DecodeError::Png(err.to_string()));
                // The controller may be gone; nothing to report to then.
                let _ = sender.send(decoded);
            });
        if let Err(err) = spawned {
            // The sender was dropped with the closure; the load completes as cancelled.
            error!("Failed to spawn decode thread for load {id}: {err}");
        }

        debug!("Load {id} issued ({png_len} PNG bytes)");
        self.pending.push(PendingLoad {
            id,
            receiver,
            backup,
            revision: self.revision,
        });
        Ok(())
    }

    /// Whether any load is still waiting to be applied.
    pub fn has_pending_load(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Applies every load whose decode has finished, without blocking.
    ///
    /// Returns the number of loads applied.
    pub fn poll_pending(&mut self) -> usize {
        let mut applied = 0;
        let mut waiting = Vec::with_capacity(self.pending.len());

        for mut load in std::mem::take(&mut self.pending) {
            match load.receiver.try_recv() {
                Ok(Some(result)) => {
                    self.finish_load(load, result);
                    applied += 1;
                }
                Ok(None) => waiting.push(load),
                Err(oneshot::Canceled) => {
                    self.finish_load(load, Err(cancelled()));
                    applied += 1;
                }
            }
        }

        self.pending = waiting;
        applied
    }

    /// Waits for every pending load and applies each as it completes.
    ///
    /// Returns the number of loads applied.
    pub async fn wait_for_pending(&mut self) -> usize {
        let mut applied = 0;
        while !self.pending.is_empty() {
            let (result, index) = {
                let receivers = self.pending.iter_mut().map(|load| &mut load.receiver);
                let (result, index, _) = future::select_all(receivers).await;
                (result, index)
            };
            let load = self.pending.remove(index);
            let result = result.unwrap_or_else(|oneshot::Canceled| Err(cancelled()));
            self.finish_load(load, result);
            applied += 1;
        }
        applied
    }

    fn finish_load(&mut self, load: PendingLoad, result: DecodeResult) {
        match result {
            Ok(image) => {
                if image.width != self.canvas.width() || image.height != self.canvas.height() {
                    debug!(
                        "Load {} is {}x{}, canvas is {}x{}",
                        load.id,
                        image.width,
                        image.height,
                        self.canvas.width(),
                        self.canvas.height()
                    );
                }
                match self.canvas.blit(&image) {
                    Ok(()) => info!("Load {} applied", load.id),
                    Err(err) => error!("Failed to draw load {}: {err}", load.id),
                }
                self.touch();
            }
            Err(err) => {
                warn!("Load {} failed: {err}", load.id);
                if load.revision != self.revision {
                    warn!(
                        "Canvas changed since load {} was issued, leaving it as is",
                        load.id
                    );
                    return;
                }
                if let Some(backup) = load.backup {
                    match self.canvas.restore(&backup) {
                        Ok(()) => info!("Restored canvas after failed load {}", load.id),
                        Err(err) => error!("Failed to restore canvas: {err}"),
                    }
                    self.touch();
                }
            }
        }
    }
}

fn cancelled() -> DecodeError {
    DecodeError::Png("decoder thread exited without a result".to_string())
}
