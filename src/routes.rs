use actix_web::{HttpResponse, web};

use crate::auth::middleware::require_auth;
use crate::handlers::{auth_handlers, booking_handlers, room_handlers};

/// Register all routes. Shared between the binary and HTTP-level tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.route("/api/login", web::post().to(auth_handlers::login));

    // Protected routes
    cfg.service(
        web::scope("/api")
            .wrap(actix_web::middleware::from_fn(require_auth))
            .route("/rooms", web::get().to(room_handlers::list))
            .route("/rooms/{room_id}/book", web::post().to(booking_handlers::create))
            .route("/bookings/my", web::get().to(booking_handlers::my_bookings))
            .route("/bookings/{booking_id}", web::delete().to(booking_handlers::cancel)),
    );

    // Default 404 handler (must be registered last)
    cfg.default_service(web::to(|| async {
        HttpResponse::NotFound().json(serde_json::json!({"error": "Not found"}))
    }));
}
