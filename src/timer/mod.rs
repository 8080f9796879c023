//! # Timer Module
//!
//! One-shot deferred work tied to the lifetime of the value that owns it.
//!
//! - [`Deferred`] - runs a closure once after a delay; aborted on drop
//! - [`ReadyFlag`] - the boot splash flag, flips to ready once
//! - [`CopyFeedback`] - the "Copied!" flag, clears itself after a delay
//!
//! All of these spawn onto the ambient tokio runtime, so they must be created
//! from inside it.

mod deferred;
mod flags;

pub use deferred::Deferred;
pub use flags::{CopyFeedback, ReadyFlag};
