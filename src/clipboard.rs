//! Best-effort system clipboard access.
//!
//! Clipboard failure is never fatal: the caller reports the error and the
//! invocation still succeeds, since the translation itself already did.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Writes `text` to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write to clipboard")?;
    Ok(())
}
