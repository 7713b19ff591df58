//! Async, pool-backed front end to the query functions.

use lightbnb_db::DbPool;
use lightbnb_types::{
    GuestReservation, NewProperty, NewUser, Property, PropertyListing, PropertySearch, User,
};
use rusqlite::Connection;

use crate::error::QueryError;
use crate::{properties, reservations, users};

/// Runs query operations against a shared connection pool.
///
/// Each call checks out one connection on a blocking worker, issues one
/// statement, and returns the connection to the pool. Cloning is cheap and
/// shares the pool.
#[derive(Clone)]
pub struct QueryService {
    pool: DbPool,
}

impl QueryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Runs `query` with a pooled connection and logs any failure.
    async fn run<T, F>(&self, operation: &'static str, query: F) -> Result<T, QueryError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, QueryError> + Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            query(&*conn)
        })
        .await
        .map_err(QueryError::from)
        .and_then(|inner| inner);

        match &result {
            Ok(_) => {}
            Err(err @ QueryError::NotFound(_)) => {
                tracing::debug!(operation, error = %err, "query matched no rows");
            }
            Err(err @ QueryError::ConstraintViolation(_)) => {
                tracing::warn!(operation, kind = err.kind(), error = %err, "query rejected");
            }
            Err(err) => {
                tracing::error!(operation, kind = err.kind(), error = %err, "query failed");
            }
        }
        result
    }

    /// See [`users::get_user_with_email`].
    pub async fn get_user_with_email(&self, email: &str) -> Result<User, QueryError> {
        let email = email.to_string();
        self.run("get_user_with_email", move |conn| {
            users::get_user_with_email(conn, &email)
        })
        .await
    }

    /// See [`users::get_user_with_id`].
    pub async fn get_user_with_id(&self, id: i64) -> Result<User, QueryError> {
        self.run("get_user_with_id", move |conn| users::get_user_with_id(conn, id))
            .await
    }

    /// See [`users::add_user`].
    pub async fn add_user(&self, user: NewUser) -> Result<User, QueryError> {
        let created = self
            .run("add_user", move |conn| users::add_user(conn, &user))
            .await?;
        tracing::info!(user_id = created.id, "user created");
        Ok(created)
    }

    /// See [`reservations::get_all_reservations`].
    pub async fn get_all_reservations(
        &self,
        guest_id: i64,
        limit: u32,
    ) -> Result<Vec<GuestReservation>, QueryError> {
        self.run("get_all_reservations", move |conn| {
            reservations::get_all_reservations(conn, guest_id, limit)
        })
        .await
    }

    /// See [`properties::get_all_properties`].
    pub async fn get_all_properties(
        &self,
        search: PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, QueryError> {
        self.run("get_all_properties", move |conn| {
            properties::get_all_properties(conn, &search, limit)
        })
        .await
    }

    /// See [`properties::add_property`].
    pub async fn add_property(&self, property: NewProperty) -> Result<Property, QueryError> {
        let created = self
            .run("add_property", move |conn| {
                properties::add_property(conn, &property)
            })
            .await?;
        tracing::info!(
            property_id = created.id,
            owner_id = created.owner_id,
            "property created"
        );
        Ok(created)
    }
}
