//! Application-defined SQL functions registered on every connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Name of the Unicode lowercasing function.
pub const CASEFOLD_FUNCTION: &str = "casefold";

/// Registers `casefold(text)`, which lowercases with full Unicode rules.
///
/// SQLite's built-in `lower()` and `LIKE` only fold ASCII. `NULL` input
/// yields `NULL`.
///
/// # Errors
///
/// Returns the SQLite error if registration fails.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        CASEFOLD_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}
