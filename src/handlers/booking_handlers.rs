use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::auth::{CurrentUser, validate};
use crate::db::DbPool;
use crate::email::Mailer;
use crate::errors::AppError;
use crate::handlers::forms::BookingForm;
use crate::handlers::helpers::{format_db, now_db, parse_booking_time};
use crate::handlers::responses::{ApiErrorResponse, BookingCreatedResponse};
use crate::models::{booking, room};
use crate::models::booking::NewBooking;

/// POST /api/rooms/{room_id}/book — reserve a room for a time interval.
///
/// Rejection order: unknown/inactive room (404), unparseable or
/// inverted or past interval (400), bad headcount or over capacity
/// (400), slot conflict (400).
pub async fn create(
    pool: web::Data<DbPool>,
    mailer: web::Data<Mailer>,
    user: CurrentUser,
    path: web::Path<i64>,
    form: web::Json<BookingForm>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();

    let mut conn = pool.get()?;
    let Some(target) = room::find_by_id(&conn, room_id)? else {
        return Err(AppError::NotFound);
    };
    if !target.is_active {
        return Err(AppError::NotFound);
    }

    let (Some(start), Some(end)) = (
        parse_booking_time(&form.start_time),
        parse_booking_time(&form.end_time),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(
            "Invalid time format, expected 'YYYY-MM-DD HH:MM AM/PM'",
        )));
    };

    if let Some(err) = validate::validate_interval(start, end, Utc::now()) {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(err)));
    }
    if let Some(err) = validate::validate_persons(form.no_of_persons) {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(err)));
    }
    if form.no_of_persons > target.capacity {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(format!(
            "Room '{}' holds at most {} persons",
            target.room_name, target.capacity
        ))));
    }

    let new = NewBooking {
        room_id,
        user_id: user.id,
        start_time: format_db(start),
        end_time: format_db(end),
        no_of_persons: form.no_of_persons,
    };

    let Some(booking_id) = booking::create_if_free(&mut conn, &new)? else {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(
            "Room is already booked for the requested time",
        )));
    };

    log::info!(
        "Booking {booking_id}: user {} reserved room {room_id} {}..{}",
        user.id,
        new.start_time,
        new.end_time
    );

    // Confirmation email must not block or fail the booking.
    let mailer = mailer.into_inner();
    let to = user.email.clone();
    let room_name = target.room_name.clone();
    let (start_time, end_time) = (new.start_time.clone(), new.end_time.clone());
    let persons = new.no_of_persons;
    tokio::spawn(async move {
        mailer
            .send_booking_confirmation(&to, &room_name, &start_time, &end_time, persons)
            .await;
    });

    Ok(HttpResponse::Created().json(BookingCreatedResponse {
        message: "Meeting room booked successfully.".to_string(),
        booking_id,
    }))
}

/// GET /api/bookings/my — the caller's bookings, room embedded.
pub async fn my_bookings(
    pool: web::Data<DbPool>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let bookings = booking::find_by_user(&conn, user.id)?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// DELETE /api/bookings/{booking_id} — cancel a future booking.
///
/// Bookings of other users read as 404; a booking whose start has
/// passed cannot be cancelled.
pub async fn cancel(
    pool: web::Data<DbPool>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();

    let conn = pool.get()?;
    let Some(existing) = booking::find_by_id_for_user(&conn, booking_id, user.id)? else {
        return Err(AppError::NotFound);
    };

    if existing.start_time <= now_db() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(
            "Cannot cancel a booking that has already started",
        )));
    }

    booking::delete(&conn, booking_id)?;
    log::info!("Booking {booking_id} cancelled by user {}", user.id);

    Ok(HttpResponse::NoContent().finish())
}
