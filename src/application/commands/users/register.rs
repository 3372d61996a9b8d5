use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, EmailAddress, NewUser, PasswordHash, Role},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

impl UserCommandService {
    /// Registration is open to anyone. The very first identity becomes the
    /// site administrator; everyone after that is a regular account.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = EmailAddress::new(command.email)?;
        let display_name = DisplayName::new(command.display_name)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(
                "email address already registered",
            ));
        }

        let role = if self.user_repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::Regular
        };

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(email, display_name, password_hash, role, created_at)?;
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = i64::from(user.id), role = %user.role, "registered identity");
        Ok(user.into())
    }
}
