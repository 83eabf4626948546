use chrono::{DateTime, Utc};

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a password: min 8 chars.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

/// Validate a booking interval: end after start, start not in the past.
pub fn validate_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<String> {
    if end <= start {
        return Some("end_time must be after start_time".to_string());
    }
    if start <= now {
        return Some("start_time must be in the future".to_string());
    }
    None
}

/// Validate the headcount for a booking.
pub fn validate_persons(no_of_persons: i64) -> Option<String> {
    if no_of_persons < 1 {
        return Some("no_of_persons must be at least 1".to_string());
    }
    None
}
