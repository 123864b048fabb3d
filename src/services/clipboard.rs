//! Clipboard bridge for single colors and exported selections.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{PaletteError, PaletteResult};
use crate::models::{DisplayFormat, SelectionSet};

/// Write-only text clipboard.
pub trait ClipboardBridge {
    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> PaletteResult<()>;
}

/// Platform clipboard backed by `arboard`.
///
/// The handle is opened on first write so that headless sessions only fail
/// when they actually try to copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// Creates a clipboard that connects lazily.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard for a process that exits right after copying.
    ///
    /// On Linux the clipboard contents belong to the writing process, so each
    /// write blocks until another application takes ownership (a clipboard
    /// manager usually does so at once) or `hold` elapses. Elsewhere this is
    /// the same as [`SystemClipboard::new`].
    #[must_use]
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: Some(hold),
        }
    }

    #[cfg(target_os = "linux")]
    fn set_text(
        clipboard: &mut arboard::Clipboard,
        text: &str,
        hold: Option<Duration>,
    ) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        match hold {
            Some(hold) => clipboard
                .set()
                .wait_until(std::time::Instant::now() + hold)
                .text(text.to_string()),
            None => clipboard.set_text(text.to_string()),
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(
        clipboard: &mut arboard::Clipboard,
        text: &str,
        _hold: Option<Duration>,
    ) -> Result<(), arboard::Error> {
        clipboard.set_text(text.to_string())
    }
}

impl ClipboardBridge for SystemClipboard {
    fn write_text(&mut self, text: &str) -> PaletteResult<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| PaletteError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let hold = self.hold;
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| PaletteError::Clipboard("clipboard not initialized".to_string()))?;

        Self::set_text(clipboard, text, hold).map_err(|e| {
            // Drop the handle so the next write reconnects
            self.inner = None;
            PaletteError::Clipboard(e.to_string())
        })
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.inner.is_some())
            .field("hold", &self.hold)
            .finish()
    }
}

/// In-process clipboard that records what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    /// Last text written, if any
    pub contents: Option<String>,
    /// Number of successful writes
    pub writes: usize,
    /// When set, every write fails as if the platform denied access
    pub fail: bool,
}

impl MemoryClipboard {
    /// Creates an empty, working clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard whose writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> PaletteResult<()> {
        if self.fail {
            return Err(PaletteError::Clipboard("copy denied".to_string()));
        }
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Shared handle, so the owner of the other handle can read what was written.
impl<T: ClipboardBridge> ClipboardBridge for Rc<RefCell<T>> {
    fn write_text(&mut self, text: &str) -> PaletteResult<()> {
        self.borrow_mut().write_text(text)
    }
}

/// Stages one swatch value on the clipboard.
pub fn copy_color(bridge: &mut dyn ClipboardBridge, hex: &str) -> PaletteResult<()> {
    bridge.write_text(hex).inspect_err(|e| {
        warn!("Failed to copy {hex}: {e}");
    })?;
    debug!("Copied {hex} to clipboard");
    Ok(())
}

/// Writes the exported selection to the clipboard.
///
/// Returns how many entries were exported. Callers guard against exporting
/// an empty selection; if they don't, the clipboard receives `""`.
pub fn export_selection(
    bridge: &mut dyn ClipboardBridge,
    selection: &SelectionSet,
    format: DisplayFormat,
) -> PaletteResult<usize> {
    let text = selection.export(format);
    bridge.write_text(&text).inspect_err(|e| {
        warn!("Failed to copy {} selected colors: {e}", selection.len());
    })?;
    debug!("Exported {} selected colors as {format}", selection.len());
    Ok(selection.len())
}
