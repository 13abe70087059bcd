// src/application/commands/users/password.rs
use crate::application::error::{ApplicationError, ApplicationResult};

const MIN_PASSWORD_LEN: usize = 4;

pub fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.trim().is_empty() {
        return Err(ApplicationError::validation("password cannot be empty"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}
