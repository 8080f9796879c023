//! # Selection Module
//!
//! Tracks which item out of a fixed, non-empty list is currently on display.
//!
//! ## Overview
//!
//! Every interactive panel in Folio is a view over a static list: the
//! terminal panel shows one canned command, the API playground shows one
//! canned request, and the showcase shows one of two tabs. The state behind
//! each of them is the same:
//!
//! - [`Selection`] - the active identifier, always a member of the list
//! - [`ConfirmableSelection`] - a selection plus a "sent" identifier that
//!   gates a secondary view (the simulated API response)
//!
//! ## State Machine (confirmable variant)
//!
//! ```text
//!            select(other)
//!   ┌──────┐ <───────────── ┌───────────┐
//!   │ Idle │                │ Confirmed │
//!   └──────┘ ─────────────> └───────────┘
//!            confirm(active)
//! ```
//!
//! `select(active)` is a no-op in both states.

pub mod confirm;
pub mod state;

pub use confirm::{ConfirmableSelection, DisplayState};
pub use state::{resolve_active, validate_items, SelectableItem, Selection, SelectionError};
