//! # Clipboard Module
//!
//! Best-effort copy of text to the user's clipboard.
//!
//! ## Backends
//!
//! | Backend | Mechanism |
//! |---------|-----------|
//! | `system` | OS clipboard through `arboard` |
//! | `osc52` | OSC 52 escape sequence written to the terminal |
//! | `auto` | `system`, falling back to `osc52` |
//!
//! Failures never reach the user. [`copy_with_feedback`] only decides
//! whether the "Copied!" indicator lights up.

mod backend;
mod osc52;
mod system;

pub use backend::{sink_for, AutoClipboard, ClipboardBackend, ClipboardError, ClipboardSink};
pub use osc52::{encode_osc52, Osc52Clipboard};
pub use system::SystemClipboard;

use crate::timer::CopyFeedback;

/// Copy `text` and raise `feedback` on success.
///
/// On failure the indicator is cleared and the error is only logged.
pub fn copy_with_feedback(
    sink: &mut dyn ClipboardSink,
    text: &str,
    feedback: &mut CopyFeedback,
) -> bool {
    match sink.write_text(text) {
        Ok(()) => {
            tracing::info!(bytes = text.len(), "copied to clipboard");
            feedback.mark();
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "clipboard copy failed");
            feedback.clear();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Recording(Vec<String>);

    impl ClipboardSink for Recording {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl ClipboardSink for Denied {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::SystemUnavailable)
        }
    }

    #[tokio::test]
    async fn test_copy_success_marks_feedback() {
        let mut sink = Recording(Vec::new());
        let mut feedback = CopyFeedback::new(Duration::from_secs(5));

        assert!(copy_with_feedback(&mut sink, "curl -X GET", &mut feedback));
        assert!(feedback.is_copied());
        assert_eq!(sink.0, vec!["curl -X GET".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_denied_leaves_feedback_unset() {
        let mut feedback = CopyFeedback::new(Duration::from_secs(5));

        assert!(!copy_with_feedback(&mut Denied, "curl", &mut feedback));
        assert!(!feedback.is_copied());
    }

    #[tokio::test]
    async fn test_copy_denied_after_success_clears_feedback() {
        let mut feedback = CopyFeedback::new(Duration::from_secs(5));
        copy_with_feedback(&mut Recording(Vec::new()), "first", &mut feedback);
        assert!(feedback.is_copied());

        copy_with_feedback(&mut Denied, "second", &mut feedback);
        assert!(!feedback.is_copied());
    }
}
