//! # UI Module
//!
//! This module provides the terminal user interface components for Folio.
//!
//! ## Components
//!
//! - [`App`] - Application state (the three selections, focus, timers)
//! - [`mod@events`] - Key handling
//! - [`mod@render`] - Rendering functions for drawing the TUI
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         Header (identity, hero tags)            │
//! ├──────────────────────┬──────────────────────────┤
//! │   Terminal Panel     │   API Playground         │
//! │   (canned commands)  │   (requests | response)  │
//! ├──────────────────────┴──────────────────────────┤
//! │   Showcase  [Projects | Profile]                │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │         Footer (contact links, key hints)       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! A boot splash with a progress gauge covers the whole screen for the
//! configured boot delay.

pub mod app;
pub mod config;
pub mod events;
pub mod render;
pub mod theme;

pub use app::App;
pub use events::handle_key;
pub use render::render;
