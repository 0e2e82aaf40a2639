//! Utility functions for code generation, URL validation, and database errors.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Destination URL checks
//! - [`db_error`] - Unique-violation inspection for SQLx errors

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
