//! Loading JSON fixtures into an empty database.
//!
//! Fixtures are JSON arrays of [`NewUser`] and [`NewProperty`] records.
//! Users are inserted first so that property `owner_id`s can refer to them
//! by their position (IDs are assigned sequentially from 1 on a fresh
//! database). Everything is written in one transaction.

use std::path::Path;

use lightbnb_types::{NewProperty, NewUser};
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::error::QueryError;
use crate::properties::add_property;
use crate::users::add_user;

/// File name of the user fixture inside a seed directory.
pub const USERS_FIXTURE: &str = "users.json";

/// File name of the property fixture inside a seed directory.
pub const PROPERTIES_FIXTURE: &str = "properties.json";

/// Counts of rows written by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub properties: usize,
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, QueryError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| QueryError::FixtureRead {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| QueryError::FixtureParse {
        path: display,
        source,
    })
}

/// Inserts the users and properties listed in two fixture files.
///
/// # Errors
///
/// Fixture read/parse errors, or any insert failure. On failure nothing is
/// written.
pub fn seed_from_json(
    conn: &Connection,
    users_path: &Path,
    properties_path: &Path,
) -> Result<SeedSummary, QueryError> {
    let users: Vec<NewUser> = read_fixture(users_path)?;
    let properties: Vec<NewProperty> = read_fixture(properties_path)?;

    let tx = conn.unchecked_transaction()?;
    for user in &users {
        add_user(&tx, user)?;
    }
    for property in &properties {
        add_property(&tx, property)?;
    }
    tx.commit()?;

    let summary = SeedSummary {
        users: users.len(),
        properties: properties.len(),
    };
    tracing::info!(
        users = summary.users,
        properties = summary.properties,
        "seeded fixtures"
    );
    Ok(summary)
}

/// Seeds from `users.json` and `properties.json` inside `dir`.
///
/// # Errors
///
/// See [`seed_from_json`].
pub fn seed_from_dir(conn: &Connection, dir: &Path) -> Result<SeedSummary, QueryError> {
    seed_from_json(conn, &dir.join(USERS_FIXTURE), &dir.join(PROPERTIES_FIXTURE))
}
