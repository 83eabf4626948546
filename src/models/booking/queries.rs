use rusqlite::{Connection, TransactionBehavior, params};

use super::types::{Booking, BookingDisplay, NewBooking};
use crate::models::room::Room;

fn row_to_booking(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get("id")?,
        room_id: row.get("room_id")?,
        user_id: row.get("user_id")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        no_of_persons: row.get("no_of_persons")?,
        created_at: row.get("created_at")?,
    })
}

/// True if any booking for the room intersects the half-open interval
/// [start, end). Back-to-back bookings (a.end == b.start) do not count.
pub fn overlap_exists(
    conn: &Connection,
    room_id: i64,
    start: &str,
    end: &str,
) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS( \
             SELECT 1 FROM bookings \
             WHERE room_id = ?1 AND start_time < ?3 AND end_time > ?2 \
         )",
        params![room_id, start, end],
        |row| row.get(0),
    )
}

/// Insert a booking unless it conflicts with an existing one.
///
/// The overlap check and the insert run inside one IMMEDIATE
/// transaction; concurrent requests serialize on the write lock and the
/// later one observes the earlier one's row.
///
/// Returns `Ok(Some(id))` on success, `Ok(None)` when the slot is taken.
pub fn create_if_free(conn: &mut Connection, new: &NewBooking) -> rusqlite::Result<Option<i64>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let taken: bool = tx.query_row(
        "SELECT EXISTS( \
             SELECT 1 FROM bookings \
             WHERE room_id = ?1 AND start_time < ?3 AND end_time > ?2 \
         )",
        params![new.room_id, new.start_time, new.end_time],
        |row| row.get(0),
    )?;
    if taken {
        return Ok(None);
    }

    tx.execute(
        "INSERT INTO bookings (room_id, user_id, start_time, end_time, no_of_persons) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            new.room_id,
            new.user_id,
            new.start_time,
            new.end_time,
            new.no_of_persons
        ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Some(id))
}

/// All bookings made by a user, room embedded, ordered by start time.
pub fn find_by_user(conn: &Connection, user_id: i64) -> rusqlite::Result<Vec<BookingDisplay>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.start_time, b.end_time, b.no_of_persons, b.created_at, \
                r.id AS room_id, r.room_name, r.capacity, r.is_active \
         FROM bookings b \
         JOIN meeting_rooms r ON r.id = b.room_id \
         WHERE b.user_id = ?1 \
         ORDER BY b.start_time ASC",
    )?;
    let rows = stmt.query_map(params![user_id], |row| {
        Ok(BookingDisplay {
            id: row.get("id")?,
            meeting_room: Room {
                id: row.get("room_id")?,
                room_name: row.get("room_name")?,
                capacity: row.get("capacity")?,
                is_active: row.get("is_active")?,
            },
            start_time: row.get("start_time")?,
            end_time: row.get("end_time")?,
            no_of_persons: row.get("no_of_persons")?,
            created_at: row.get("created_at")?,
        })
    })?;
    rows.collect()
}

/// Find a booking only if it belongs to the given user. Hides other
/// users' bookings from ownership probes.
pub fn find_by_id_for_user(
    conn: &Connection,
    booking_id: i64,
    user_id: i64,
) -> rusqlite::Result<Option<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, room_id, user_id, start_time, end_time, no_of_persons, created_at \
         FROM bookings WHERE id = ?1 AND user_id = ?2",
    )?;
    let mut rows = stmt.query_map(params![booking_id, user_id], row_to_booking)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

pub fn delete(conn: &Connection, booking_id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM bookings WHERE id = ?1", params![booking_id])?;
    Ok(())
}

/// Count bookings for a room (tests and diagnostics).
pub fn count_by_room(conn: &Connection, room_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE room_id = ?1",
        params![room_id],
        |row| row.get(0),
    )
}
