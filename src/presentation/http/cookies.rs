// src/presentation/http/cookies.rs
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Attach both session cookies. The tokens themselves carry the expiry; the
/// cookies are session-scoped and die with the browser at the latest.
pub fn with_session_cookies(jar: CookieJar, access: String, refresh: String) -> CookieJar {
    jar.add(session_cookie(ACCESS_TOKEN_COOKIE, access))
        .add(session_cookie(REFRESH_TOKEN_COOKIE, refresh))
}

pub fn without_session_cookies(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((ACCESS_TOKEN_COOKIE, "")).path("/"))
        .remove(Cookie::build((REFRESH_TOKEN_COOKIE, "")).path("/"))
}
