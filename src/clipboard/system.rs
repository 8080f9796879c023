//! System clipboard backend
//!
//! The OS clipboard through `arboard`. Opening it fails in headless sessions
//! (no display server), which is reported as
//! [`ClipboardError::SystemUnavailable`].

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardSink};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;
        clipboard
            .set_text(text)
            .map_err(|_| ClipboardError::WriteError)
    }
}
