use std::sync::Arc;

use crate::domain::{todo::TodoRepository, user::UserRepository};

pub struct TodoQueryService {
    pub(super) todo_repo: Arc<dyn TodoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl TodoQueryService {
    pub fn new(todo_repo: Arc<dyn TodoRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            todo_repo,
            user_repo,
        }
    }
}
