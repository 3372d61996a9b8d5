use super::ContactCommandService;
use crate::{
    application::{access, dto::Actor, error::ApplicationResult},
    domain::{
        contact::MessageId,
        policy::{Action, ResourceKind, ResourceRef},
    },
};

pub struct DeleteContactMessageCommand {
    pub id: i64,
}

impl ContactCommandService {
    /// Admin-only; deleting an id that is already gone succeeds silently.
    pub async fn delete_message(
        &self,
        actor: &Actor,
        command: DeleteContactMessageCommand,
    ) -> ApplicationResult<()> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Delete,
            ResourceRef::collection(ResourceKind::ContactMessage),
        )
        .await?;

        let id = MessageId::new(command.id)?;
        self.contact_repo.delete(id).await?;
        Ok(())
    }
}
