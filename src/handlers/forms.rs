use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Booking request body. Times use the `%Y-%m-%d %I:%M %p` format,
/// e.g. `2026-03-01 02:30 PM`, read as UTC.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub start_time: String,
    pub end_time: String,
    pub no_of_persons: i64,
}

/// Optional availability window for the room listing. Both bounds must
/// be present and parseable for the filter to apply.
#[derive(Debug, Deserialize)]
pub struct RoomListQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
