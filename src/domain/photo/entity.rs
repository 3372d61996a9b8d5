// src/domain/photo/entity.rs
use crate::domain::photo::value_objects::{PhotoId, PhotoStatus, PhotoTitle, StoredFilename};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Photo {
    pub id: PhotoId,
    pub title: PhotoTitle,
    pub filename: StoredFilename,
    pub status: PhotoStatus,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn enable(&mut self) {
        self.status = PhotoStatus::Enabled;
    }

    pub fn disable(&mut self) {
        self.status = PhotoStatus::Disabled;
    }
}

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: PhotoTitle,
    pub filename: StoredFilename,
    pub status: PhotoStatus,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_photo() -> Photo {
        Photo {
            id: PhotoId::new(1).unwrap(),
            title: PhotoTitle::new("sunset").unwrap(),
            filename: StoredFilename::new("abc123.jpg").unwrap(),
            status: PhotoStatus::Enabled,
            owner_id: UserId::new(1).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn disable_and_enable_flip_status() {
        let mut photo = sample_photo();
        photo.disable();
        assert!(!photo.status.is_enabled());
        photo.enable();
        assert!(photo.status.is_enabled());
    }
}
