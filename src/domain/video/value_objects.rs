// src/domain/video/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoId(pub i64);

impl VideoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("video id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VideoId> for i64 {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTitle(String);

impl VideoTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("video title cannot be empty".into()));
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<VideoTitle> for String {
    fn from(value: VideoTitle) -> Self {
        value.0
    }
}

impl fmt::Display for VideoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier derived from the title: lowercase alphanumerics and
/// single hyphens, no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoSlug(String);

impl VideoSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-');
        if !well_formed {
            return Err(DomainError::Validation(format!("malformed slug '{value}'")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<VideoSlug> for String {
    fn from(value: VideoSlug) -> Self {
        value.0
    }
}

impl fmt::Display for VideoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_hyphenated_lowercase() {
        assert!(VideoSlug::new("hello-world-2").is_ok());
    }

    #[test]
    fn slug_rejects_uppercase_and_edge_hyphens() {
        assert!(VideoSlug::new("Hello").is_err());
        assert!(VideoSlug::new("-hello").is_err());
        assert!(VideoSlug::new("hello-").is_err());
        assert!(VideoSlug::new("").is_err());
    }
}
