// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, LogoutCommand, RefreshSessionCommand, RegisterUserCommand},
    dto::UserDto,
    error::ApplicationError,
    ports::media::UploadedAssets,
};
use crate::presentation::http::cookies::{
    REFRESH_TOKEN_COOKIE, with_session_cookies, without_session_cookies,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Registration payload. The asset paths point at files already staged by
/// the upload middleware; their presence is validated here, once, before
/// anything enters the core.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub avatar_path: Option<String>,
    pub cover_image_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionBody {
    pub user: UserDto,
}

fn parse_assets(payload: &RegisterRequest) -> Result<UploadedAssets, HttpError> {
    let avatar = payload
        .avatar_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::validation("avatar is required"))
        })?;

    let cover_image = payload
        .cover_image_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(UploadedAssets {
        avatar: PathBuf::from(avatar),
        cover_image,
    })
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let assets = parse_assets(&payload)?;

    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        full_name: payload.full_name,
    };

    let user = state
        .services
        .user_commands
        .register(command, assets)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(user, "registration successful")),
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<(CookieJar, Json<ApiResponse<SessionBody>>)> {
    let command = LoginUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    let jar = with_session_cookies(jar, result.access.token, result.refresh.token);

    Ok((
        jar,
        Json(ApiResponse::ok(
            SessionBody { user: result.user },
            "log-in successful",
        )),
    ))
}

/// Rotate the session. The refresh token is taken from its cookie first,
/// with a body field as the non-cookie fallback.
pub async fn refresh_token(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    body: axum::body::Bytes,
) -> HttpResult<(CookieJar, Json<ApiResponse<SessionBody>>)> {
    let from_body = || {
        serde_json::from_slice::<RefreshRequest>(&body)
            .ok()
            .and_then(|payload| payload.refresh_token)
    };

    let token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(from_body)
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("invalid refresh token"))
        })?;

    let result = state
        .services
        .user_commands
        .refresh(RefreshSessionCommand { token })
        .await
        .into_http()?;

    let jar = with_session_cookies(jar, result.access.token, result.refresh.token);

    Ok((
        jar,
        Json(ApiResponse::ok(
            SessionBody { user: result.user },
            "session refreshed",
        )),
    ))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    jar: CookieJar,
) -> HttpResult<(CookieJar, Json<ApiResponse<serde_json::Value>>)> {
    state
        .services
        .user_commands
        .logout(LogoutCommand { user_id: user.id })
        .await
        .into_http()?;

    let jar = without_session_cookies(jar);

    Ok((
        jar,
        Json(ApiResponse::ok(serde_json::json!({}), "logged out")),
    ))
}

pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<UserDto>>> {
    let profile = state
        .services
        .user_queries
        .current_user(&user)
        .await
        .into_http()?;

    Ok(Json(ApiResponse::ok(profile, "current user")))
}
