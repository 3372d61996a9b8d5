use super::TodoCommandService;
use crate::{
    application::{
        access,
        dto::Actor,
        error::ApplicationResult,
    },
    domain::{
        policy::{Action, ResourceKind, ResourceRef},
        todo::TodoId,
    },
};

pub struct DeleteTodoCommand {
    pub id: i64,
}

impl TodoCommandService {
    /// Deleting an id that no longer exists succeeds silently; the
    /// deletion it asked for is already a fact.
    pub async fn delete_todo(
        &self,
        actor: &Actor,
        command: DeleteTodoCommand,
    ) -> ApplicationResult<()> {
        let id = TodoId::new(command.id)?;
        let Some(item) = self.todo_repo.find_by_id(id).await? else {
            return Ok(());
        };

        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Delete,
            ResourceRef::owned(ResourceKind::Todo, item.owner_id),
        )
        .await?;

        self.todo_repo.delete(id).await?;
        Ok(())
    }
}
