use actix_web::{HttpRequest, HttpResponse, web};

use crate::auth::jwt::JwtService;
use crate::auth::rate_limit::RateLimiter;
use crate::auth::{password, validate};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::forms::LoginForm;
use crate::handlers::responses::{
    ApiErrorResponse, LoginResponse, LoginUserResponse, TokenResponse,
};
use crate::models::user;

/// POST /api/login — verify credentials and issue an access token.
///
/// Unknown email and wrong password return the same 401 body.
pub async fn login(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    jwt: web::Data<JwtService>,
    limiter: web::Data<RateLimiter>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, AppError> {
    // Rate-limit check BEFORE any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        return Ok(HttpResponse::TooManyRequests().json(ApiErrorResponse::new(
            "Too many failed login attempts. Please try again later.",
        )));
    }

    if let Some(err) = validate::validate_email(&form.email) {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new(err)));
    }
    if form.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse::new("Password is required")));
    }

    let conn = pool.get()?;
    let found = user::find_by_email(&conn, form.email.trim())?;

    let Some(u) = found else {
        limiter.record_failure(ip);
        return Ok(HttpResponse::Unauthorized()
            .json(ApiErrorResponse::new("Invalid email or password")));
    };

    match password::verify_password(&form.password, &u.password) {
        Ok(true) => {
            limiter.clear(ip);

            let access = jwt
                .generate_access_token(u.id, &u.email, &u.username)
                .map_err(|e| AppError::Token(e.to_string()))?;

            Ok(HttpResponse::Ok().json(LoginResponse {
                token: TokenResponse { access },
                user: LoginUserResponse {
                    id: u.id,
                    username: u.username,
                    email: u.email,
                },
            }))
        }
        _ => {
            limiter.record_failure(ip);
            Ok(HttpResponse::Unauthorized().json(ApiErrorResponse::new("Invalid email or password")))
        }
    }
}
