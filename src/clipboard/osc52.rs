use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::backend::{ClipboardError, ClipboardSink};

/// Asks the terminal emulator to set the clipboard through an OSC 52 escape.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write = io::Stdout> {
    out: W,
}

impl Default for Osc52Clipboard<io::Stdout> {
    fn default() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let sequence = encode_osc52(text);
        self.out
            .write_all(sequence.as_bytes())
            .map_err(|_| ClipboardError::WriteError)?;
        self.out.flush().map_err(|_| ClipboardError::WriteError)
    }
}

pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x07")
}
