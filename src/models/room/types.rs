use serde::Serialize;

/// A bookable meeting room.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: i64,
    pub room_name: String,
    pub capacity: i64,
    pub is_active: bool,
}
