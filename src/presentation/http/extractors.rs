// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::{cookies::ACCESS_TOKEN_COOKIE, state::HttpState},
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Per-request session gate. Extraction prefers the `accessToken` cookie and
/// falls back to an `Authorization: Bearer` header; verification and
/// principal lookup happen in the application layer. Whatever step fails,
/// the rejection is the same unauthorized error.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Like [`Authenticated`] but absence of a credential is not an error; a
/// present-but-invalid credential still rejects.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn bearer_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

async fn state_from_parts(parts: &mut Parts) -> Result<HttpState, HttpError> {
    let Extension(state) = Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(state)
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let state = state_from_parts(parts).await?;

        let token = bearer_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "you are not logged in".into(),
            ))
        })?;

        let user = state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let state = state_from_parts(parts).await?;

        match bearer_token(parts) {
            Some(token) => {
                let user = state
                    .services
                    .authenticate(&token)
                    .await
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(user)))
            }
            None => Ok(Self(None)),
        }
    }
}
