//! Shared test infrastructure.
//!
//! Provides temporary SQLite databases (plain connections for model
//! tests, pools for HTTP-level tests) and row-insertion helpers.
//! The returned `TempDir` must be kept alive for the database to
//! remain valid.

use rusqlite::{Connection, params};
use tempfile::TempDir;

use roombook::db::{self, DbPool, MIGRATIONS};

pub const TEST_EMAIL: &str = "test@example.com";
pub const TEST_PASSWORD: &str = "password123";

#[allow(dead_code)]
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS).expect("Failed to run migrations");

    (dir, conn)
}

#[allow(dead_code)]
pub fn setup_test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = db::init_pool(db_path.to_str().expect("utf-8 path"));
    db::run_migrations(&pool);
    (dir, pool)
}

/// Insert a user with an argon2-hashed password. Returns the row id.
#[allow(dead_code)]
pub fn insert_user(conn: &Connection, email: &str, username: &str, password: &str) -> i64 {
    let hash = roombook::auth::password::hash_password(password).expect("Failed to hash password");
    conn.execute(
        "INSERT INTO users (email, username, password) VALUES (?1, ?2, ?3)",
        params![email, username, hash],
    )
    .expect("Failed to insert user");
    conn.last_insert_rowid()
}

#[allow(dead_code)]
pub fn insert_room(conn: &Connection, room_name: &str, capacity: i64) -> i64 {
    conn.execute(
        "INSERT INTO meeting_rooms (room_name, capacity) VALUES (?1, ?2)",
        params![room_name, capacity],
    )
    .expect("Failed to insert room");
    conn.last_insert_rowid()
}

/// Insert a booking row directly. Times must be canonical UTC strings.
#[allow(dead_code)]
pub fn insert_booking(
    conn: &Connection,
    room_id: i64,
    user_id: i64,
    start_time: &str,
    end_time: &str,
    no_of_persons: i64,
) -> i64 {
    conn.execute(
        "INSERT INTO bookings (room_id, user_id, start_time, end_time, no_of_persons) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![room_id, user_id, start_time, end_time, no_of_persons],
    )
    .expect("Failed to insert booking");
    conn.last_insert_rowid()
}
