//! Property search and creation.

use lightbnb_types::{to_cents, NewProperty, Property, PropertyListing, PropertySearch};
use rusqlite::{params, Connection, Row};

use crate::error::QueryError;
use crate::filter::{contains_pattern, FilterBuilder};

/// Stored property columns, in the order [`map_row_to_property`] reads them.
pub(crate) const PROPERTY_COLUMNS: [&str; 15] = [
    "id",
    "owner_id",
    "title",
    "description",
    "thumbnail_photo_url",
    "cover_photo_url",
    "cost_per_night",
    "street",
    "city",
    "province",
    "post_code",
    "country",
    "parking_spaces",
    "number_of_bathrooms",
    "number_of_bedrooms",
];

/// Comma-separated property columns, each prefixed with `alias.`.
pub(crate) fn qualified_property_columns(alias: &str) -> String {
    PROPERTY_COLUMNS
        .iter()
        .map(|column| format!("{alias}.{column}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads a property from `row`, starting at column index `offset`.
pub(crate) fn map_row_to_property(row: &Row, offset: usize) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(offset)?,
        owner_id: row.get(offset + 1)?,
        title: row.get(offset + 2)?,
        description: row.get(offset + 3)?,
        thumbnail_photo_url: row.get(offset + 4)?,
        cover_photo_url: row.get(offset + 5)?,
        cost_per_night: row.get(offset + 6)?,
        street: row.get(offset + 7)?,
        city: row.get(offset + 8)?,
        province: row.get(offset + 9)?,
        post_code: row.get(offset + 10)?,
        country: row.get(offset + 11)?,
        parking_spaces: row.get(offset + 12)?,
        number_of_bathrooms: row.get(offset + 13)?,
        number_of_bedrooms: row.get(offset + 14)?,
    })
}

/// Appends the search filters to `builder` in their fixed evaluation order:
/// city, owner, minimum price, maximum price, minimum rating.
fn apply_search(builder: &mut FilterBuilder, search: &PropertySearch) {
    if let Some(city) = &search.city {
        // Both sides are lowercased; LIKE alone only folds ASCII.
        builder.filter(
            "casefold(p.city) LIKE ? ESCAPE '\\'",
            contains_pattern(&city.to_lowercase()),
        );
    }
    if let Some(owner_id) = search.owner_id {
        builder.filter("p.owner_id = ?", owner_id);
    }
    if let Some(min) = search.minimum_price_per_night {
        builder.filter("p.cost_per_night >= ?", to_cents(min));
    }
    if let Some(max) = search.maximum_price_per_night {
        builder.filter("p.cost_per_night <= ?", to_cents(max));
    }
    // A zero (or negative) minimum rating is no filter at all, so unreviewed
    // properties stay in the results.
    if let Some(rating) = search.minimum_rating.filter(|r| *r > 0.0) {
        builder.having("AVG(r.rating) >= ?", rating);
    }
}

/// Returns up to `limit` properties matching `search`, cheapest first.
///
/// Each listing carries the average rating of the property's reviews;
/// properties without reviews have no average and are excluded by a
/// positive `minimum_rating` filter. City matching is Unicode
/// case-insensitive and relies on the `casefold` function that
/// `lightbnb_db` registers on pooled connections.
///
/// # Errors
///
/// Returns `QueryError` if the statement fails.
pub fn get_all_properties(
    conn: &Connection,
    search: &PropertySearch,
    limit: u32,
) -> Result<Vec<PropertyListing>, QueryError> {
    let mut builder = FilterBuilder::new();
    apply_search(&mut builder, search);
    let limit_placeholder = builder.bind(i64::from(limit));

    let sql = format!(
        "SELECT {columns}, AVG(r.rating) AS average_rating
         FROM properties AS p
         LEFT JOIN property_reviews AS r ON r.property_id = p.id
         {where_clause}
         GROUP BY p.id
         {having_clause}
         ORDER BY p.cost_per_night ASC, p.id ASC
         LIMIT {limit_placeholder}",
        columns = qualified_property_columns("p"),
        where_clause = builder.where_clause(),
        having_clause = builder.having_clause(),
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(builder.params().as_slice(), |row| {
        Ok(PropertyListing {
            property: map_row_to_property(row, 0)?,
            average_rating: row.get(PROPERTY_COLUMNS.len())?,
        })
    })?;

    let mut listings = Vec::new();
    for row in rows {
        listings.push(row?);
    }
    Ok(listings)
}

/// Inserts a property and returns the stored row, including its generated ID.
///
/// `property.cost_per_night` is taken in major units and stored in cents.
/// Fields are not validated; the owner must exist.
///
/// # Errors
///
/// `QueryError::ConstraintViolation` when `owner_id` references no user.
pub fn add_property(conn: &Connection, property: &NewProperty) -> Result<Property, QueryError> {
    let sql = format!(
        "INSERT INTO properties (
            owner_id, title, description, thumbnail_photo_url, cover_photo_url,
            cost_per_night, street, city, province, post_code, country,
            parking_spaces, number_of_bathrooms, number_of_bedrooms
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        RETURNING {}",
        PROPERTY_COLUMNS.join(", ")
    );

    let created = conn.query_row(
        &sql,
        params![
            property.owner_id,
            property.title,
            property.description,
            property.thumbnail_photo_url,
            property.cover_photo_url,
            property.cost_per_night_cents(),
            property.street,
            property.city,
            property.province,
            property.post_code,
            property.country,
            property.parking_spaces,
            property.number_of_bathrooms,
            property.number_of_bedrooms,
        ],
        |row| map_row_to_property(row, 0),
    )?;
    Ok(created)
}
