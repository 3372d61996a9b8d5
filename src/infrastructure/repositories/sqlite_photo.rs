// src/infrastructure/repositories/sqlite_photo.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::photo::{
    NewPhoto, Photo, PhotoId, PhotoRepository, PhotoStatus, PhotoTitle, StoredFilename,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqlitePhotoRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePhotoRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PhotoRow {
    id: i64,
    title: String,
    filename: String,
    enabled: i64,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = DomainError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        Ok(Photo {
            id: PhotoId::new(row.id)?,
            title: PhotoTitle::new(row.title)?,
            filename: StoredFilename::new(row.filename)?,
            status: PhotoStatus::from_flag(row.enabled != 0),
            owner_id: UserId::new(row.owner_id)?,
            created_at: row.created_at,
        })
    }
}

const PHOTO_COLUMNS: &str = "id, title, filename, enabled, owner_id, created_at";

#[async_trait]
impl PhotoRepository for SqlitePhotoRepository {
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let NewPhoto {
            title,
            filename,
            status,
            owner_id,
            created_at,
        } = photo;

        let row = sqlx::query_as::<_, PhotoRow>(&format!(
            "INSERT INTO photos (title, filename, enabled, owner_id, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {PHOTO_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(filename.as_str())
        .bind(if status.is_enabled() { 1 } else { 0 })
        .bind(i64::from(owner_id))
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Photo::try_from(row)
    }

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        let row = sqlx::query_as::<_, PhotoRow>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Photo::try_from).transpose()
    }

    async fn list_enabled(&self) -> DomainResult<Vec<Photo>> {
        let rows = sqlx::query_as::<_, PhotoRow>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos WHERE enabled = 1 ORDER BY created_at DESC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Photo::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<(Vec<Photo>, u64)> {
        let rows = sqlx::query_as::<_, PhotoRow>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos ORDER BY created_at DESC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM photos")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let photos = rows
            .into_iter()
            .map(Photo::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((photos, total as u64))
    }

    async fn set_status(&self, id: PhotoId, status: PhotoStatus) -> DomainResult<Photo> {
        let row = sqlx::query_as::<_, PhotoRow>(&format!(
            "UPDATE photos SET enabled = ? WHERE id = ? RETURNING {PHOTO_COLUMNS}"
        ))
        .bind(if status.is_enabled() { 1 } else { 0 })
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Photo::try_from(row)
    }

    async fn delete(&self, id: PhotoId) -> DomainResult<()> {
        sqlx::query("DELETE FROM photos WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
