// src/presentation/http/response.rs
use serde::Serialize;

/// Success envelope: `{status, data, message}`. Failures use the error
/// body in `error.rs` instead.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status,
            data,
            message: message.into(),
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(200, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(201, data, message)
    }
}
