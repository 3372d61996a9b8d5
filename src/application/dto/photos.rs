use crate::domain::photo::Photo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDto {
    pub id: i64,
    pub title: String,
    pub filename: String,
    pub enabled: bool,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Photo> for PhotoDto {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id.into(),
            title: photo.title.into(),
            filename: photo.filename.to_string(),
            enabled: photo.status.is_enabled(),
            owner_id: photo.owner_id.into(),
            created_at: photo.created_at,
        }
    }
}
