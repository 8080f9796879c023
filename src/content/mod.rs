//! # Content Module
//!
//! The static résumé data rendered by Folio.
//!
//! ## Overview
//!
//! All content lives in one immutable [`Profile`] built at startup, either
//! from the built-in data ([`Profile::builtin`]) or from a JSON file
//! ([`Profile::load_from`]). Nothing mutates it afterwards; the UI only
//! chooses which part to show.
//!
//! ## JSON Format
//!
//! `folio --dump-profile` prints the built-in profile, which is the easiest
//! starting point for a custom one:
//!
//! ```json
//! {
//!   "identity": { "name": "...", "role": "...", "email": "...", ... },
//!   "hero_tags": ["..."],
//!   "terminal_commands": [
//!     { "id": "whoami", "label": "whoami", "command": "whoami", "output": ["..."] }
//!   ],
//!   "api_requests": [
//!     { "id": "profile", "method": "GET", "url": "...", "description": "...",
//!       "curl": "...", "response": { "status": "200 OK", "body": ["..."] } }
//!   ],
//!   ...
//! }
//! ```

mod builtin;
mod profile;

pub use profile::{
    ApiRequest, ApiResponse, Highlight, HttpMethod, Identity, Profile, Project, SkillGroup,
    TerminalCommand,
};
