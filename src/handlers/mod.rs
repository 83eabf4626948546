pub mod auth_handlers;
pub mod booking_handlers;
pub mod forms;
pub mod helpers;
pub mod responses;
pub mod room_handlers;
