// src/application/queries/todos/list.rs
use super::TodoQueryService;
use crate::{
    application::{
        access,
        dto::{Actor, TodoDto},
        error::ApplicationResult,
    },
    domain::policy::{Action, ResourceKind, ResourceRef},
};

impl TodoQueryService {
    /// A user's own list. Anonymous visitors get an empty list rather
    /// than an error; the page simply has nothing to show them.
    pub async fn list_own(&self, actor: &Actor) -> ApplicationResult<Vec<TodoDto>> {
        let Some(user) = actor.user() else {
            return Ok(Vec::new());
        };

        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::ReadOwn,
            ResourceRef::owned(ResourceKind::Todo, user.id),
        )
        .await?;

        let items = self.todo_repo.list_by_owner(user.id).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
