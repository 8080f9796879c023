//! Folio - a terminal portfolio
//!
//! This library provides the pieces behind the `folio` binary: the static
//! résumé content, the selectable-item display state shared by every panel,
//! the cancellable timers behind the boot splash and the "Copied!" indicator,
//! best-effort clipboard access, and the ratatui front end.

pub mod clipboard;
pub mod content;
pub mod logging;
pub mod selection;
pub mod timer;
pub mod ui;
