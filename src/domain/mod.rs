//! Domain layer containing business entities and logic.
//!
//! Defines entities, the repository interface, and click processing,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. A redirect resolves a short code
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel (never awaited)
//! 3. [`click_worker::run_click_worker`] applies the increment with a timeout
//! 4. Failures are logged and dropped

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
