// src/domain/todo/entity.rs
use crate::domain::todo::value_objects::{TodoId, TodoStatus, TodoText};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: TodoText,
    pub status: TodoStatus,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = TodoStatus::Done;
        self.updated_at = now;
    }

    pub fn reopen(&mut self, now: DateTime<Utc>) {
        self.status = TodoStatus::Open;
        self.updated_at = now;
    }

    pub fn set_text(&mut self, text: TodoText, now: DateTime<Utc>) {
        self.text = text;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewTodoItem {
    pub text: TodoText,
    pub status: TodoStatus,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TodoUpdate {
    pub id: TodoId,
    pub text: Option<TodoText>,
    pub status: Option<TodoStatus>,
    pub updated_at: DateTime<Utc>,
}

impl TodoUpdate {
    pub fn new(id: TodoId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_text(mut self, text: TodoText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }
}
