// src/domain/photo/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(pub i64);

impl PhotoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("photo id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PhotoId> for i64 {
    fn from(value: PhotoId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTitle(String);

impl PhotoTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhotoTitle> for String {
    fn from(value: PhotoTitle) -> Self {
        value.0
    }
}

const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// The extension of an uploaded image, taken from the substring after the
/// last `.` of the caller-supplied name. Comparison against the allowed set
/// is case-insensitive; the original spelling is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageExtension(String);

impl ImageExtension {
    pub fn from_filename(name: &str) -> DomainResult<Self> {
        let (_, extension) = name.rsplit_once('.').ok_or_else(|| {
            DomainError::Validation(format!("'{name}' has no file extension"))
        })?;
        let lowered = extension.to_ascii_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&lowered.as_str()) {
            return Err(DomainError::Validation(format!(
                "'{extension}' is not an allowed image extension"
            )));
        }
        Ok(Self(extension.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// System-generated name a photo is stored under. Never derived from the
/// caller-supplied filename beyond its extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFilename(String);

impl StoredFilename {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "stored filename cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two gallery states of a photo. Disabled photos stay on disk and in
/// the table but drop out of the public gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoStatus {
    Enabled,
    Disabled,
}

impl PhotoStatus {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            PhotoStatus::Enabled
        } else {
            PhotoStatus::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, PhotoStatus::Enabled)
    }

    pub fn toggled(self) -> Self {
        match self {
            PhotoStatus::Enabled => PhotoStatus::Disabled,
            PhotoStatus::Disabled => PhotoStatus::Enabled,
        }
    }
}
