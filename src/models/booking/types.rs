use serde::Serialize;

use crate::models::room::Room;

/// A stored reservation row.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub no_of_persons: i64,
    pub created_at: String,
}

/// New booking data. Times must be canonical UTC strings.
pub struct NewBooking {
    pub room_id: i64,
    pub user_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub no_of_persons: i64,
}

/// Booking with its room embedded, for the "my bookings" listing.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDisplay {
    pub id: i64,
    pub meeting_room: Room,
    pub start_time: String,
    pub end_time: String,
    pub no_of_persons: i64,
    pub created_at: String,
}
