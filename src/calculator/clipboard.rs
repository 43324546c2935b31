//! Copying the display text to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;
    debug!(%text, "copied display to clipboard");
    Ok(())
}
