// src/application/commands/todos/create.rs
use super::TodoCommandService;
use crate::{
    application::{
        access,
        dto::{Actor, TodoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        policy::{Action, ResourceKind, ResourceRef},
        todo::{NewTodoItem, TodoStatus, TodoText},
    },
};

pub struct CreateTodoCommand {
    pub text: String,
}

impl TodoCommandService {
    pub async fn create_todo(
        &self,
        actor: &Actor,
        command: CreateTodoCommand,
    ) -> ApplicationResult<TodoDto> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Create,
            ResourceRef::collection(ResourceKind::Todo),
        )
        .await?;
        let owner = actor
            .user()
            .ok_or_else(|| ApplicationError::unauthorized("login required"))?;

        let text = TodoText::new(command.text)?;
        let now = self.clock.now();

        let new_item = NewTodoItem {
            text,
            status: TodoStatus::Open,
            owner_id: owner.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.todo_repo.insert(new_item).await?;
        Ok(created.into())
    }
}
