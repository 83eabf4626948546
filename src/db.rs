use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::models::{room, user};
use crate::models::user::NewUser;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Seed an admin user and a starter set of rooms if the database is empty.
/// Idempotent: skipped entirely once any user exists.
pub fn seed(pool: &DbPool, admin_password_hash: &str) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");

    let count = user::count(&conn).unwrap_or(0);
    if count > 0 {
        log::info!("Database already seeded ({count} users), skipping seed");
        return;
    }

    let admin = NewUser {
        email: "admin@example.com".to_string(),
        username: "admin".to_string(),
        password: admin_password_hash.to_string(),
    };
    match user::create(&conn, &admin) {
        Ok(id) => log::info!("Seeded admin user (id {id})"),
        Err(e) => log::error!("Failed to seed admin user: {e}"),
    }

    let rooms: &[(&str, i64)] = &[
        ("Alpha Room", 10),
        ("Beta Room", 6),
        ("Gamma Room", 20),
    ];
    for (name, capacity) in rooms {
        match room::create(&conn, name, *capacity) {
            Ok(_) => log::info!("Seeded room '{name}' (capacity {capacity})"),
            Err(e) => log::error!("Failed to seed room '{name}': {e}"),
        }
    }
}
