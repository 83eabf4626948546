use serde::Serialize;

/// Error body for API endpoints.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub access: String,
}

#[derive(Serialize, Debug)]
pub struct LoginUserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub token: TokenResponse,
    pub user: LoginUserResponse,
}

#[derive(Serialize, Debug)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking_id: i64,
}
