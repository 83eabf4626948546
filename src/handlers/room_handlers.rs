use actix_web::{HttpResponse, web};

use crate::auth::CurrentUser;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::forms::RoomListQuery;
use crate::handlers::helpers::{format_db, parse_window_time};
use crate::models::room;

/// GET /api/rooms — list active rooms, optionally filtered to rooms
/// free over `[start_time, end_time)`.
///
/// The window applies only when both bounds are present and parseable;
/// otherwise it is ignored and all active rooms are returned.
pub async fn list(
    pool: web::Data<DbPool>,
    _user: CurrentUser,
    query: web::Query<RoomListQuery>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;

    let window = match (query.start_time.as_deref(), query.end_time.as_deref()) {
        (Some(s), Some(e)) => match (parse_window_time(s), parse_window_time(e)) {
            (Some(start), Some(end)) if start < end => Some((start, end)),
            _ => {
                log::debug!("Ignoring unusable availability window: {s:?}..{e:?}");
                None
            }
        },
        _ => None,
    };

    let rooms = match window {
        Some((start, end)) => room::find_available(&conn, &format_db(start), &format_db(end))?,
        None => room::find_all_active(&conn)?,
    };

    Ok(HttpResponse::Ok().json(rooms))
}
