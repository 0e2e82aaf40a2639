//! Bundled static front-end.
//!
//! Provides the single-page app that talks to `POST /api/links`.
//!
//! # Modules
//!
//! - [`assets`] - Embedded bundle lookup and content-type guessing
//! - [`handlers`] - Fallback handler with SPA index behaviour

pub mod assets;
pub mod handlers;

pub use handlers::static_handler;
