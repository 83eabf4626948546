use rusqlite::{Connection, params};

use super::types::Room;

fn row_to_room(row: &rusqlite::Row) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get("id")?,
        room_name: row.get("room_name")?,
        capacity: row.get("capacity")?,
        is_active: row.get("is_active")?,
    })
}

/// All active rooms, ordered by name.
pub fn find_all_active(conn: &Connection) -> rusqlite::Result<Vec<Room>> {
    let mut stmt = conn.prepare(
        "SELECT id, room_name, capacity, is_active \
         FROM meeting_rooms WHERE is_active = 1 ORDER BY room_name ASC",
    )?;
    let rows = stmt.query_map([], row_to_room)?;
    rows.collect()
}

/// Active rooms with no booking overlapping the half-open interval
/// [start, end). Overlap predicate: existing.start < end AND
/// existing.end > start. Times are canonical UTC strings, so string
/// comparison orders correctly.
pub fn find_available(conn: &Connection, start: &str, end: &str) -> rusqlite::Result<Vec<Room>> {
    let mut stmt = conn.prepare(
        "SELECT r.id, r.room_name, r.capacity, r.is_active \
         FROM meeting_rooms r \
         WHERE r.is_active = 1 \
           AND NOT EXISTS ( \
               SELECT 1 FROM bookings b \
               WHERE b.room_id = r.id \
                 AND b.start_time < ?2 \
                 AND b.end_time > ?1 \
           ) \
         ORDER BY r.room_name ASC",
    )?;
    let rows = stmt.query_map(params![start, end], row_to_room)?;
    rows.collect()
}

/// Find a room by id regardless of active flag. Callers decide how to
/// treat inactive rooms.
pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Room>> {
    let mut stmt = conn.prepare(
        "SELECT id, room_name, capacity, is_active FROM meeting_rooms WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map(params![id], row_to_room)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

pub fn create(conn: &Connection, room_name: &str, capacity: i64) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO meeting_rooms (room_name, capacity) VALUES (?1, ?2)",
        params![room_name, capacity],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_active(conn: &Connection, id: i64, active: bool) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE meeting_rooms SET is_active = ?2 WHERE id = ?1",
        params![id, active],
    )?;
    Ok(())
}
