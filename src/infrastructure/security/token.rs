// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, RefreshClaims},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenIssuer,
};
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HS256 token issuer with two independent key pairs. Access tokens carry a
/// denormalized snapshot of the display attributes so per-request
/// verification needs no storage round-trip; refresh tokens carry identity
/// only. Built once from configuration and immutable afterwards.
pub struct JwtTokenIssuer {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct AccessTokenClaims {
    sub: i64,
    username: String,
    email: String,
    full_name: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct RefreshTokenClaims {
    sub: i64,
    iat: i64,
    exp: i64,
}

impl JwtTokenIssuer {
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret),
            access_decoding: DecodingKey::from_secret(access_secret),
            refresh_encoding: EncodingKey::from_secret(refresh_secret),
            refresh_decoding: DecodingKey::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
        }
    }

    fn lifetime(ttl: Duration) -> ApplicationResult<(DateTime<Utc>, DateTime<Utc>, i64)> {
        let issued_at = Utc::now();
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        Ok((issued_at, expires_at, ttl.num_seconds().max(0)))
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock skew allowance: expiry is a hard bound.
        validation.leeway = 0;
        validation
    }

    fn timestamps(iat: i64, exp: i64) -> ApplicationResult<(DateTime<Utc>, DateTime<Utc>)> {
        let issued_at = DateTime::<Utc>::from_timestamp(iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        Ok((issued_at, expires_at))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_access_token(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let (issued_at, expires_at, expires_in) = Self::lifetime(self.access_ttl)?;

        let claims = AccessTokenClaims {
            sub: user.id.into(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            full_name: user.full_name.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in,
        })
    }

    fn issue_refresh_token(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let (issued_at, expires_at, expires_in) = Self::lifetime(self.refresh_ttl)?;

        let claims = RefreshTokenClaims {
            sub: user.id.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in,
        })
    }

    /// Bad signature, malformed payload, and expiry all collapse into one
    /// opaque unauthorized error so a probing caller learns nothing about
    /// why a stolen token was refused.
    fn verify_access(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = jsonwebtoken::decode::<AccessTokenClaims>(
            token,
            &self.access_decoding,
            &Self::validation(),
        )
        .map_err(|_| ApplicationError::unauthorized("invalid access token"))?;

        let claims = data.claims;
        let id = UserId::new(claims.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid access token"))?;
        let (issued_at, expires_at) = Self::timestamps(claims.iat, claims.exp)?;

        Ok(AuthenticatedUser {
            id,
            username: claims.username,
            email: claims.email,
            full_name: claims.full_name,
            issued_at,
            expires_at,
        })
    }

    fn verify_refresh(&self, token: &str) -> ApplicationResult<RefreshClaims> {
        let data = jsonwebtoken::decode::<RefreshTokenClaims>(
            token,
            &self.refresh_decoding,
            &Self::validation(),
        )
        .map_err(|_| ApplicationError::unauthorized("invalid refresh token"))?;

        let claims = data.claims;
        let id = UserId::new(claims.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid refresh token"))?;
        let (issued_at, expires_at) = Self::timestamps(claims.iat, claims.exp)?;

        Ok(RefreshClaims {
            id,
            issued_at,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Email, PasswordHash, Username};

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new(
            b"access-secret",
            b"refresh-secret",
            Duration::from_secs(900),
            Duration::from_secs(86_400),
        )
    }

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: UserId::new(7).unwrap(),
            username: Username::new("ana").unwrap(),
            email: Email::new("a@x.com").unwrap(),
            password_hash: PasswordHash::new("$argon2id$stub").unwrap(),
            full_name: "Ana".into(),
            avatar_url: "https://media.test/avatar.png".into(),
            cover_image_url: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn access_token_round_trips_claims() {
        let issuer = issuer();
        let user = sample_user();
        let issued = issuer.issue_access_token(&user).unwrap();
        let auth = issuer.verify_access(&issued.token).unwrap();

        assert_eq!(auth.id, user.id);
        assert_eq!(auth.username, "ana");
        assert_eq!(auth.email, "a@x.com");
        assert_eq!(auth.full_name, "Ana");
        assert!(auth.expires_at > auth.issued_at);
    }

    #[test]
    fn token_classes_do_not_cross_verify() {
        let issuer = issuer();
        let user = sample_user();
        let access = issuer.issue_access_token(&user).unwrap();
        let refresh = issuer.issue_refresh_token(&user).unwrap();

        assert!(issuer.verify_refresh(&access.token).is_err());
        assert!(issuer.verify_access(&refresh.token).is_err());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let ours = issuer();
        let theirs = JwtTokenIssuer::new(
            b"other-access",
            b"other-refresh",
            Duration::from_secs(900),
            Duration::from_secs(86_400),
        );
        let token = theirs.issue_access_token(&sample_user()).unwrap();
        assert!(ours.verify_access(&token.token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = issuer();
        let past = Utc::now() - ChronoDuration::hours(2);
        let claims = AccessTokenClaims {
            sub: 7,
            username: "ana".into(),
            email: "a@x.com".into(),
            full_name: "Ana".into(),
            iat: past.timestamp(),
            exp: (past + ChronoDuration::minutes(15)).timestamp(),
        };
        let token =
            jsonwebtoken::encode(&Header::default(), &claims, &issuer.access_encoding).unwrap();
        assert!(issuer.verify_access(&token).is_err());
    }

    #[test]
    fn garbage_input_is_rejected() {
        let issuer = issuer();
        assert!(issuer.verify_access("not-a-token").is_err());
        assert!(issuer.verify_refresh("").is_err());
    }
}
