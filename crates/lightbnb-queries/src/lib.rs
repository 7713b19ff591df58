//! Query service for the LightBnB listing application.
//!
//! Every operation builds one parameterized SQL statement, runs it against a
//! pooled SQLite connection, and reshapes the rows into the records defined
//! in `lightbnb-types`.
//!
//! Operations come in two forms:
//!
//! - plain functions over a `&Connection` ([`get_user_with_email`],
//!   [`get_all_properties`], ...), for callers that already hold a connection
//!   or a transaction;
//! - async methods on [`QueryService`], which check a connection out of the
//!   shared pool on a blocking worker and log every failure before returning
//!   it.
//!
//! Failures are never swallowed: see [`QueryError`] for the taxonomy.

mod error;
mod filter;
mod properties;
mod reservations;
mod seed;
mod service;
mod users;


pub use error::QueryError;
pub use filter::FilterBuilder;
pub use properties::{add_property, get_all_properties};
pub use reservations::get_all_reservations;
pub use seed::{seed_from_dir, seed_from_json, SeedSummary, PROPERTIES_FIXTURE, USERS_FIXTURE};
pub use service::QueryService;
pub use users::{add_user, get_user_with_email, get_user_with_id};
