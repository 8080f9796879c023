//! Clipboard backend selection and error types

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{osc52::Osc52Clipboard, system::SystemClipboard};

/// Errors that can occur during clipboard operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// System clipboard is not available (no display server, denied, ...)
    #[error("system clipboard is unavailable")]
    SystemUnavailable,
    /// Error writing to the clipboard or terminal
    #[error("failed to write clipboard contents")]
    WriteError,
}

/// Where copied text goes.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Which clipboard mechanism to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::System => "system",
            ClipboardBackend::Osc52 => "osc52",
        };
        f.write_str(name)
    }
}

/// Tries the system clipboard first, falls back to OSC 52.
#[derive(Debug, Default)]
pub struct AutoClipboard<P = SystemClipboard, F = Osc52Clipboard> {
    primary: P,
    fallback: F,
}

impl<P: ClipboardSink, F: ClipboardSink> AutoClipboard<P, F> {
    pub fn with_backends(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ClipboardSink, F: ClipboardSink> ClipboardSink for AutoClipboard<P, F> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.primary
            .write_text(text)
            .or_else(|_| self.fallback.write_text(text))
    }
}

/// Build the sink for a configured backend.
pub fn sink_for(backend: ClipboardBackend) -> Box<dyn ClipboardSink> {
    match backend {
        ClipboardBackend::System => Box::new(SystemClipboard),
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::default()),
        ClipboardBackend::Auto => {
            Box::new(AutoClipboard::<SystemClipboard, Osc52Clipboard>::default())
        }
    }
}
