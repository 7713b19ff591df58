//! Shared record types for the LightBnB data layer.
//!
//! These structs mirror the relational schema (`users`, `properties`,
//! `reservations`, `property_reviews`) plus the input and search shapes the
//! HTTP layer hands to the query service. Monetary amounts are stored as
//! integer cents; input types that take a price take it in major currency
//! units and convert with [`to_cents`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of rows returned by list queries.
pub const DEFAULT_LIMIT: u32 = 10;

/// Number of cents in one major currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

/// Converts an amount in major currency units to cents.
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn to_cents(major: i64) -> i64 {
    major.saturating_mul(CENTS_PER_UNIT)
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email. Unique across users.
    pub email: String,
    /// Password hash. Opaque to this layer.
    pub password: String,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A rentable property as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Database ID.
    pub id: i64,
    /// ID of the owning user.
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in cents.
    pub cost_per_night: i64,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
}

/// Input for creating a property.
///
/// `cost_per_night` is in major currency units; it is stored in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
}

impl NewProperty {
    /// Nightly cost converted to cents, as written to the database.
    pub fn cost_per_night_cents(&self) -> i64 {
        to_cents(self.cost_per_night)
    }
}

/// A property together with the average rating of its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    /// Mean review rating, `None` when the property has no reviews.
    pub average_rating: Option<f64>,
}

/// A booking of a property by a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub guest_id: i64,
    pub property_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A guest's reservation joined with the reserved property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestReservation {
    pub reservation: Reservation,
    pub property: Property,
    /// Mean review rating of the property, `None` when unreviewed.
    pub average_rating: Option<f64>,
}

/// A guest's review of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReview {
    pub id: i64,
    pub property_id: i64,
    pub guest_id: i64,
    /// Reservation the review was written for, if recorded.
    pub reservation_id: Option<i64>,
    pub rating: i64,
    pub comment: Option<String>,
}

/// Optional filters for a property search.
///
/// Every field is independent; set fields are combined with AND. Prices are
/// in major currency units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Case-insensitive substring of the city name.
    pub city: Option<String>,
    /// Exact owner ID.
    pub owner_id: Option<i64>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    /// Minimum average review rating.
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// Returns `true` when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.owner_id.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}
