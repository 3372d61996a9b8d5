use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::EmailAddress,
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Authenticate credentials and hand back the actor context the
    /// request layer stores in its session. Activeness is checked here at
    /// the login boundary; every later action re-reads it anyway.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthenticatedUser> {
        let email = EmailAddress::new(command.email)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.status.is_active() {
            return Err(ApplicationError::account_inactive(
                "this account has been deactivated",
            ));
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        tracing::debug!(user_id = i64::from(user.id), "login succeeded");
        Ok(user.into())
    }
}
