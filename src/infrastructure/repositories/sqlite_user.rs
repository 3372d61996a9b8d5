// src/infrastructure/repositories/sqlite_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    AccountStatus, DisplayName, EmailAddress, NewUser, PasswordHash, User, UserId,
    UserRepository, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    display_name: String,
    password_hash: String,
    role: String,
    is_active: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: EmailAddress::new(row.email)?,
            display_name: DisplayName::new(row.display_name)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse()?,
            status: AccountStatus::from_flag(row.is_active != 0),
            created_at: row.created_at,
        })
    }
}

const USER_COLUMNS: &str = "id, email, display_name, password_hash, role, is_active, created_at";

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&*self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            display_name,
            password_hash,
            role,
            status,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, display_name, password_hash, role, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
        .bind(email.as_str())
        .bind(display_name.as_str())
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(if status.is_active() { 1 } else { 0 })
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            status,
            role,
            password_hash,
        } = update;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET is_active = COALESCE(?, is_active), role = COALESCE(?, role), \
             password_hash = COALESCE(?, password_hash) WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
        .bind(status.map(|s| if s.is_active() { 1 } else { 0 }))
        .bind(role.map(|r| r.as_str()))
        .bind(password_hash.as_ref().map(|h| h.as_str()))
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
