use rusqlite::{Connection, params};

use super::types::{NewUser, User};

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        username: row.get("username")?,
        password: row.get("password")?,
        is_active: row.get("is_active")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Find an active user by email for authentication. Returns the internal
/// struct with the password hash.
pub fn find_by_email(conn: &Connection, email: &str) -> rusqlite::Result<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, email, username, password, is_active, created_at, updated_at \
         FROM users WHERE email = ?1 AND is_active = 1",
    )?;
    let mut rows = stmt.query_map(params![email], row_to_user)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, email, username, password, is_active, created_at, updated_at \
         FROM users WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map(params![id], row_to_user)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// Create a new user. `new.password` must already be an argon2 hash.
pub fn create(conn: &Connection, new: &NewUser) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (email, username, password) VALUES (?1, ?2, ?3)",
        params![new.email, new.username, new.password],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
}
