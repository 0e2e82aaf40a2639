//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the code
//! generator, the link repository, and click dispatch. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
