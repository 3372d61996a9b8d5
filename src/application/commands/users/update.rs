use super::UserCommandService;
use crate::{
    application::{
        access,
        dto::{Actor, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        policy::{Action, ResourceKind, ResourceRef},
        user::{AccountStatus, Role, UserId, UserUpdate},
    },
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Administrative account management: enable/disable an identity and
    /// change its role. Authorized against the identity collection so the
    /// owner-match rule cannot let users promote themselves.
    pub async fn update_user(
        &self,
        actor: &Actor,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let target_id = UserId::new(command.user_id)?;

        if command.is_active.is_none() && command.role.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        if command.is_active.is_some() {
            access::authorize(
                self.user_repo.as_ref(),
                actor,
                Action::ToggleEnable,
                ResourceRef::collection(ResourceKind::Identity),
            )
            .await?;
        }

        if command.role.is_some() {
            access::authorize(
                self.user_repo.as_ref(),
                actor,
                Action::Update,
                ResourceRef::collection(ResourceKind::Identity),
            )
            .await?;
        }

        let mut update = UserUpdate::new(target_id);

        if let Some(is_active) = command.is_active {
            update = update.with_status(AccountStatus::from_flag(is_active));
        }

        if let Some(role) = command.role {
            update = update.with_role(role);
        }

        let user = self.user_repo.update(update).await?;
        tracing::info!(
            user_id = i64::from(user.id),
            is_active = user.status.is_active(),
            role = %user.role,
            "account updated"
        );
        Ok(user.into())
    }
}
