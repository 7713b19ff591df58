//! Guest reservation history.

use lightbnb_types::{GuestReservation, Reservation};
use rusqlite::{params, Connection};

use crate::error::QueryError;
use crate::properties::{map_row_to_property, qualified_property_columns, PROPERTY_COLUMNS};

/// Returns up to `limit` reservations made by `guest_id`, earliest start first.
///
/// Each reservation is joined with its property and that property's average
/// review rating. An unknown guest yields an empty list.
///
/// # Errors
///
/// Returns `QueryError` if the statement fails.
pub fn get_all_reservations(
    conn: &Connection,
    guest_id: i64,
    limit: u32,
) -> Result<Vec<GuestReservation>, QueryError> {
    let sql = format!(
        "SELECT res.id, res.guest_id, res.property_id, res.start_date, res.end_date,
                {columns}, AVG(r.rating) AS average_rating
         FROM reservations AS res
         JOIN properties AS p ON p.id = res.property_id
         LEFT JOIN property_reviews AS r ON r.property_id = p.id
         WHERE res.guest_id = ?1
         GROUP BY res.id
         ORDER BY res.start_date ASC, res.id ASC
         LIMIT ?2",
        columns = qualified_property_columns("p"),
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![guest_id, i64::from(limit)], |row| {
        Ok(GuestReservation {
            reservation: Reservation {
                id: row.get(0)?,
                guest_id: row.get(1)?,
                property_id: row.get(2)?,
                start_date: row.get(3)?,
                end_date: row.get(4)?,
            },
            property: map_row_to_property(row, 5)?,
            average_rating: row.get(5 + PROPERTY_COLUMNS.len())?,
        })
    })?;

    let mut reservations = Vec::new();
    for row in rows {
        reservations.push(row?);
    }
    Ok(reservations)
}
