// src/application/commands/todos/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{todo::TodoRepository, user::UserRepository};

pub struct TodoCommandService {
    pub(super) todo_repo: Arc<dyn TodoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TodoCommandService {
    pub fn new(
        todo_repo: Arc<dyn TodoRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            todo_repo,
            user_repo,
            clock,
        }
    }
}
