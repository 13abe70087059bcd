// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, videos};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentialed CORS: cookie-based sessions rule out wildcard origins
    // and headers.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/users/register", post(auth::register))
        .route("/api/v1/users/login", post(auth::login))
        .route("/api/v1/users/logout", post(auth::logout))
        .route("/api/v1/users/refresh-token", post(auth::refresh_token))
        .route("/api/v1/users/me", get(auth::me))
        .route("/api/v1/videos", post(videos::create_video))
        .route("/api/v1/videos/mine", get(videos::list_my_videos))
        .route("/api/v1/videos/{slug}", get(videos::get_video_by_slug))
        .route("/api/v1/videos/{id}/edit", patch(videos::update_video))
        .route("/api/v1/videos/{id}/publish", post(videos::set_publish_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
