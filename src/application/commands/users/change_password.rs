use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        access,
        dto::Actor,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        policy::{Action, ResourceKind, ResourceRef},
        user::{PasswordHash, UserId, UserUpdate},
    },
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    /// Required when changing one's own password; an admin reset omits it.
    pub current_password: Option<String>,
    pub new_password: String,
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        actor: &Actor,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let target_id = UserId::new(command.user_id)?;
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Update,
            ResourceRef::owned(ResourceKind::Identity, target_id),
        )
        .await?;

        let user = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let is_self = actor.user().is_some_and(|acting| acting.id == user.id);
        if is_self {
            let current = command
                .current_password
                .as_deref()
                .ok_or_else(|| ApplicationError::validation("current password is required"))?;
            self.password_hasher
                .verify(current, user.password_hash.as_str())
                .await?;
        }

        validate_password(&command.new_password)?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let update = UserUpdate::new(target_id).with_password_hash(password_hash);
        self.user_repo.update(update).await?;

        tracing::info!(user_id = i64::from(target_id), "password changed");
        Ok(())
    }
}
