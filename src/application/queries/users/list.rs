use super::UserQueryService;
use crate::application::{
    access,
    dto::{Actor, UserDto},
    error::ApplicationResult,
};
use crate::domain::policy::{Action, ResourceKind, ResourceRef};

impl UserQueryService {
    /// Admin view of every registered identity.
    pub async fn list_users(&self, actor: &Actor) -> ApplicationResult<Vec<UserDto>> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::AdminList,
            ResourceRef::collection(ResourceKind::Identity),
        )
        .await?;

        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
