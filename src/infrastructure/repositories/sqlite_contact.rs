// src/infrastructure/repositories/sqlite_contact.rs
use super::map_sqlx;
use crate::domain::contact::{
    ContactMessage, ContactMessageRepository, ContactName, MessageBody, MessageId,
    NewContactMessage,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::EmailAddress;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteContactMessageRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteContactMessageRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactMessageRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: ContactMessageRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: MessageId::new(row.id)?,
            name: ContactName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            body: MessageBody::new(row.message)?,
            submitted_at: row.submitted_at,
        })
    }
}

const MESSAGE_COLUMNS: &str = "id, name, email, message, submitted_at";

#[async_trait]
impl ContactMessageRepository for SqliteContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let NewContactMessage {
            name,
            email,
            body,
            submitted_at,
        } = message;

        let row = sqlx::query_as::<_, ContactMessageRow>(&format!(
            "INSERT INTO contact_messages (name, email, message, submitted_at) \
             VALUES (?, ?, ?, ?) RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(body.as_str())
        .bind(submitted_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }

    async fn list(&self) -> DomainResult<(Vec<ContactMessage>, u64)> {
        let rows = sqlx::query_as::<_, ContactMessageRow>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM contact_messages ORDER BY submitted_at ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM contact_messages")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let messages = rows
            .into_iter()
            .map(ContactMessage::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((messages, total as u64))
    }

    async fn delete(&self, id: MessageId) -> DomainResult<()> {
        sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
