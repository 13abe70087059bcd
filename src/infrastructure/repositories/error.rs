// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_VIDEO_SLUG: &str = "videos_slug_key";
const CNT_VIDEO_OWNER: &str = "videos_owner_id_fkey";

/// Translate sqlx failures into domain errors. Uniqueness violations on the
/// identity columns surface as the same duplicate-identity conflict the
/// pre-check produces; the constraint, not the pre-check, is what actually
/// decides races.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME | CNT_USER_EMAIL => DomainError::Conflict(
                        "a user with this username or email already exists".into(),
                    ),
                    CNT_VIDEO_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_VIDEO_OWNER => DomainError::NotFound("owner not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
