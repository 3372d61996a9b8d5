use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "to-do item id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TodoId> for i64 {
    fn from(value: TodoId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoText(String);

impl TodoText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "to-do text cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TodoText> for String {
    fn from(value: TodoText) -> Self {
        value.0
    }
}

/// The two legal states of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Open,
    Done,
}

impl TodoStatus {
    pub fn from_flag(done: bool) -> Self {
        if done { TodoStatus::Done } else { TodoStatus::Open }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TodoStatus::Done)
    }
}
