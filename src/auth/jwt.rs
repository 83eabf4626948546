use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_EXPIRATION_MINUTES: i64 = 1440;

/// HS256 access-token configuration. The secret comes from the
/// `JWT_SECRET` env var; without it a random secret is generated and
/// sessions do not survive a restart.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
    pub issuer: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(val) if val.len() >= MIN_SECRET_LEN => val,
            Ok(val) => {
                log::warn!(
                    "JWT_SECRET too short ({} bytes, need {MIN_SECRET_LEN}+) — generating random secret",
                    val.len()
                );
                generate_secret()
            }
            Err(_) => {
                log::warn!("No JWT_SECRET set — generating random secret (tokens invalid after restart)");
                generate_secret()
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "roombook".to_string()),
        }
    }
}

/// Generate a random 256-bit secret, hex-encoded.
fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// Claims carried in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub username: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

#[derive(Debug)]
pub enum JwtError {
    Expired,
    Invalid(String),
    Generation(String),
}

impl fmt::Display for JwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtError::Expired => write!(f, "Token expired"),
            JwtError::Invalid(e) => write!(f, "Invalid token: {e}"),
            JwtError::Generation(e) => write!(f, "Token generation failed: {e}"),
        }
    }
}

/// Issues and validates access tokens.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn from_env() -> Self {
        Self::with_config(JwtConfig::from_env())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn generate_access_token(
        &self,
        user_id: i64,
        email: &str,
        username: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Generation(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization: Bearer <token>` header value.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "a-test-secret-that-is-long-enough-0123".to_string(),
            expiration_minutes: 60,
            issuer: "roombook".to_string(),
        })
    }

    #[test]
    fn test_generate_and_validate_token() {
        let service = test_service();
        let token = service
            .generate_access_token(42, "user@example.com", "user")
            .expect("Failed to generate token");

        let claims = service.validate_token(&token).expect("Failed to validate token");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.username, "user");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::with_config(JwtConfig {
            secret: "a-test-secret-that-is-long-enough-0123".to_string(),
            expiration_minutes: -5,
            issuer: "roombook".to_string(),
        });
        let token = service
            .generate_access_token(1, "user@example.com", "user")
            .expect("Failed to generate token");

        match service.validate_token(&token) {
            Err(JwtError::Expired) => {}
            other => panic!("Expected expired-token error, got {other:?}"),
        }
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let service = test_service();
        let other = JwtService::with_config(JwtConfig {
            secret: "a-different-secret-that-is-long-enough".to_string(),
            expiration_minutes: 60,
            issuer: "roombook".to_string(),
        });
        let token = other
            .generate_access_token(1, "user@example.com", "user")
            .expect("Failed to generate token");

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header(""), None);
    }
}
