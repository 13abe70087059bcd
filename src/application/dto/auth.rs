// src/application/dto/auth.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One issued token plus its lifetime bounds, as handed to the transport
/// layer. The expiry baked into the token is authoritative; the session
/// cookies carrying it stay Max-Age-less.
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Claims recovered from a verified access token. Display attributes are
/// denormalized into the token at issue time so verification alone is enough
/// to describe the caller.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Claims recovered from a verified refresh token. Carries identity only;
/// validity additionally requires a match against the value stored on the
/// principal row.
#[derive(Debug, Clone)]
pub struct RefreshClaims {
    pub id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
