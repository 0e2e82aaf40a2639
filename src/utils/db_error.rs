//! Helpers for inspecting PostgreSQL errors surfaced through SQLx.

/// Name of the unique constraint guarding `links.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "links_short_code_key";

/// Returns true if the error is a unique constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Returns the violated constraint name, if the database reported one.
pub fn unique_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Returns true if the error is a collision on the short code column.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    matches!(unique_constraint(e), Some(SHORT_CODE_CONSTRAINT))
}
