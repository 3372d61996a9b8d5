use super::TodoQueryService;
use crate::{
    application::{
        access,
        dto::{Actor, Listing, TodoDto},
        error::ApplicationResult,
    },
    domain::policy::{Action, ResourceKind, ResourceRef},
};

impl TodoQueryService {
    /// Admin view: every item regardless of owner, with the total count.
    pub async fn list_all(&self, actor: &Actor) -> ApplicationResult<Listing<TodoDto>> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::AdminList,
            ResourceRef::collection(ResourceKind::Todo),
        )
        .await?;

        let (items, total) = self.todo_repo.list_all().await?;
        Ok(Listing::new(
            items.into_iter().map(Into::into).collect(),
            total,
        ))
    }
}
