//! Clipboard integration for share links.

use super::types::ShareError;
use std::process::{Command, Stdio};
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Copies text to the Wayland clipboard.
///
/// Uses the `wl-copy` command when available and falls back to wl-clipboard-rs.
pub fn copy_text(text: &str) -> Result<(), ShareError> {
    log::debug!("Copying {} bytes of text to clipboard", text.len());

    match copy_via_command(text) {
        Ok(()) => {
            log::info!("Copied share link via wl-copy");
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!("wl-copy failed ({cmd_err}), falling back to wl-clipboard-rs");
            copy_via_library(text).map_err(|lib_err| {
                ShareError::Clipboard(format!(
                    "wl-copy failed: {cmd_err} ; wl-clipboard-rs failed: {lib_err}"
                ))
            })?;
            log::info!("Copied share link via wl-clipboard-rs");
            Ok(())
        }
    }
}

fn copy_via_library(text: &str) -> Result<(), ShareError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();
    opts.serve_requests(ServeRequests::Only(1));
    opts.copy(
        Source::Bytes(text.as_bytes().into()),
        MimeType::Text,
    )
    .map_err(|e| ShareError::Clipboard(format!("wl-clipboard-rs error: {e}")))
}

fn copy_via_command(text: &str) -> Result<(), ShareError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("text/plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ShareError::Clipboard(format!("Failed to spawn wl-copy: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ShareError::Clipboard(format!("Failed to write to wl-copy: {e}")))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ShareError::Clipboard(format!("Failed to wait for wl-copy: {e}")))?;

    if !output.status.success() {
        return Err(ShareError::Clipboard(format!(
            "wl-copy exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}
