//! Clipboard boundary: trait seam so the app stays testable without a real
//! system clipboard.

use anyhow::Result;

pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// arboard-backed system clipboard. Construction can fail (headless
/// environments); callers degrade to a no-op clipboard and log it.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self { inner: arboard::Clipboard::new()? })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_string())?;
        Ok(())
    }
}

/// Used when no system clipboard is available: every write fails, so the
/// copied confirmation simply never appears.
pub struct NullClipboard;

impl ClipboardWriter for NullClipboard {
    fn write(&mut self, _text: &str) -> Result<()> {
        anyhow::bail!("no system clipboard available")
    }
}
