//! PostgreSQL persistence.
//!
//! - [`PgLinkRepository`] - Link storage and retrieval via parameterized SQLx queries
//! - [`pool`] - Pool construction with startup retry, and the embedded migrator

pub mod pg_link_repository;
pub mod pool;

pub use pg_link_repository::PgLinkRepository;
pub use pool::{MIGRATOR, connect_with_retry, run_migrations};
