use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web,
};

use crate::auth::extractor::CurrentUser;
use crate::auth::jwt::{JwtError, JwtService};

fn unauthorized_response(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({"error": message}))
}

/// Middleware function that validates the `Authorization: Bearer` token
/// and injects [`CurrentUser`] into request extensions.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let Some(jwt) = req.app_data::<web::Data<JwtService>>().cloned() else {
        log::error!("JwtService missing from app data");
        let response = HttpResponse::InternalServerError()
            .json(serde_json::json!({"error": "Internal server error"}));
        return Ok(req.into_response(response).map_into_right_body());
    };

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let Some(token) = auth_header.and_then(JwtService::extract_from_header) else {
        let response = unauthorized_response("Authentication required");
        return Ok(req.into_response(response).map_into_right_body());
    };

    match jwt.validate_token(token) {
        Ok(claims) => match CurrentUser::try_from(claims) {
            Ok(user) => {
                req.extensions_mut().insert(user);
                next.call(req).await.map(|res| res.map_into_left_body())
            }
            Err(e) => {
                log::warn!("Malformed token claims: {e}");
                let response = unauthorized_response("Invalid token");
                Ok(req.into_response(response).map_into_right_body())
            }
        },
        Err(JwtError::Expired) => {
            let response = unauthorized_response("Token expired");
            Ok(req.into_response(response).map_into_right_body())
        }
        Err(e) => {
            log::debug!("Token rejected: {e}");
            let response = unauthorized_response("Invalid token");
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
