// src/infrastructure/repositories/sqlite_todo.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::todo::{
    NewTodoItem, TodoId, TodoItem, TodoRepository, TodoStatus, TodoText, TodoUpdate,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTodoRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    text: String,
    done: i64,
    owner_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for TodoItem {
    type Error = DomainError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(TodoItem {
            id: TodoId::new(row.id)?,
            text: TodoText::new(row.text)?,
            status: TodoStatus::from_flag(row.done != 0),
            owner_id: UserId::new(row.owner_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const TODO_COLUMNS: &str = "id, text, done, owner_id, created_at, updated_at";

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert(&self, item: NewTodoItem) -> DomainResult<TodoItem> {
        let NewTodoItem {
            text,
            status,
            owner_id,
            created_at,
            updated_at,
        } = item;

        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "INSERT INTO todos (text, done, owner_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {TODO_COLUMNS}"
        ))
        .bind(text.as_str())
        .bind(if status.is_done() { 1 } else { 0 })
        .bind(i64::from(owner_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        TodoItem::try_from(row)
    }

    async fn find_by_id(&self, id: TodoId) -> DomainResult<Option<TodoItem>> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(TodoItem::try_from).transpose()
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<TodoItem>> {
        let rows = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = ? ORDER BY created_at ASC"
        ))
        .bind(i64::from(owner_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TodoItem::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<(Vec<TodoItem>, u64)> {
        let rows = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos ORDER BY created_at ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM todos")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(TodoItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total as u64))
    }

    async fn update(&self, update: TodoUpdate) -> DomainResult<TodoItem> {
        let TodoUpdate {
            id,
            text,
            status,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "UPDATE todos SET text = COALESCE(?, text), done = COALESCE(?, done), \
             updated_at = ? WHERE id = ? RETURNING {TODO_COLUMNS}"
        ))
        .bind(text.as_ref().map(|t| t.as_str()))
        .bind(status.map(|s| if s.is_done() { 1 } else { 0 }))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        TodoItem::try_from(row)
    }

    async fn delete(&self, id: TodoId) -> DomainResult<()> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
