/// Returns whether a SQLx error is a unique-constraint violation on the
/// short code.
///
/// The `links` table carries a single unique constraint (the `code` primary
/// key), so any unique violation reported by SQLite is a code collision.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
