//! Core domain entities.
//!
//! The service has a single persisted entity, [`Link`], plus [`NewLink`] for
//! the fields supplied at creation time.

pub mod link;

pub use link::{Link, NewLink};
