use super::TodoCommandService;
use crate::{
    application::{
        access,
        dto::{Actor, TodoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        policy::{Action, ResourceKind, ResourceRef},
        todo::{TodoId, TodoText, TodoUpdate},
    },
};

pub struct UpdateTodoCommand {
    pub id: i64,
    pub text: Option<String>,
    pub done: Option<bool>,
}

impl TodoCommandService {
    /// Edit text and/or done state. A missing id is NotFound before any
    /// privilege question arises; the write itself is a single statement.
    pub async fn update_todo(
        &self,
        actor: &Actor,
        command: UpdateTodoCommand,
    ) -> ApplicationResult<TodoDto> {
        let id = TodoId::new(command.id)?;
        let mut item = self
            .todo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("to-do item not found"))?;

        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Update,
            ResourceRef::owned(ResourceKind::Todo, item.owner_id),
        )
        .await?;

        if command.text.is_none() && command.done.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let now = self.clock.now();
        let mut update = TodoUpdate::new(id, now);

        if let Some(text) = command.text {
            let text = TodoText::new(text)?;
            item.set_text(text.clone(), now);
            update = update.with_text(text);
        }

        if let Some(done) = command.done {
            if done != item.status.is_done() {
                if done {
                    item.complete(now);
                } else {
                    item.reopen(now);
                }
            }
            update = update.with_status(item.status);
        }

        let updated = self.todo_repo.update(update).await?;
        Ok(updated.into())
    }
}
