use crate::domain::todo::TodoItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: i64,
    pub text: String,
    pub done: bool,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoItem> for TodoDto {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id.into(),
            text: item.text.into(),
            done: item.status.is_done(),
            owner_id: item.owner_id.into(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
