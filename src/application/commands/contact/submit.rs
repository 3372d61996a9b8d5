// src/application/commands/contact/submit.rs
use super::ContactCommandService;
use crate::{
    application::{
        access,
        dto::{Actor, ContactMessageDto},
        error::ApplicationResult,
    },
    domain::{
        contact::{ContactName, MessageBody, NewContactMessage},
        policy::{Action, ResourceKind, ResourceRef},
        user::EmailAddress,
    },
};

pub struct SubmitContactMessageCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactCommandService {
    /// Open to every visitor, signed in or not.
    pub async fn submit_message(
        &self,
        actor: &Actor,
        command: SubmitContactMessageCommand,
    ) -> ApplicationResult<ContactMessageDto> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Create,
            ResourceRef::collection(ResourceKind::ContactMessage),
        )
        .await?;

        let name = ContactName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        let body = MessageBody::new(command.message)?;

        let new_message = NewContactMessage {
            name,
            email,
            body,
            submitted_at: self.clock.now(),
        };

        let created = self.contact_repo.insert(new_message).await?;
        tracing::info!(message_id = i64::from(created.id), "contact message received");
        Ok(created.into())
    }
}
