//! User lookups and registration.

use lightbnb_types::{NewUser, User};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::QueryError;

/// Returns the user with exactly this email.
///
/// # Errors
///
/// `QueryError::NotFound` when no user has the email.
pub fn get_user_with_email(conn: &Connection, email: &str) -> Result<User, QueryError> {
    conn.query_row(
        "SELECT id, name, email, password FROM users WHERE email = ?1",
        [email],
        map_row_to_user,
    )
    .optional()?
    .ok_or_else(|| QueryError::NotFound(format!("email does not exist: {email}")))
}

/// Returns the user with this ID.
///
/// # Errors
///
/// `QueryError::NotFound` when no user has the ID.
pub fn get_user_with_id(conn: &Connection, id: i64) -> Result<User, QueryError> {
    conn.query_row(
        "SELECT id, name, email, password FROM users WHERE id = ?1",
        [id],
        map_row_to_user,
    )
    .optional()?
    .ok_or_else(|| QueryError::NotFound(format!("id does not exist: {id}")))
}

/// Inserts a user and returns the stored row, including its generated ID.
///
/// Fields are stored as given. A duplicate email is rejected by the
/// database's unique constraint.
///
/// # Errors
///
/// `QueryError::ConstraintViolation` when the email is already registered.
pub fn add_user(conn: &Connection, user: &NewUser) -> Result<User, QueryError> {
    let created = conn.query_row(
        "INSERT INTO users (name, email, password)
         VALUES (?1, ?2, ?3)
         RETURNING id, name, email, password",
        params![user.name, user.email, user.password],
        map_row_to_user,
    )?;
    Ok(created)
}

fn map_row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
    })
}
