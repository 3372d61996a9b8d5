use super::UserQueryService;
use crate::application::{
    access,
    dto::{Actor, UserDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::policy::{Action, ResourceKind, ResourceRef};

impl UserQueryService {
    pub async fn get_profile(&self, actor: &Actor) -> ApplicationResult<UserDto> {
        let user = actor
            .user()
            .ok_or_else(|| ApplicationError::unauthorized("login required"))?;

        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::ReadOwn,
            ResourceRef::owned(ResourceKind::Identity, user.id),
        )
        .await?;

        let current = self
            .user_repo
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(current.into())
    }
}
