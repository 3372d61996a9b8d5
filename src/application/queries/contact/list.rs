use super::ContactQueryService;
use crate::{
    application::{
        access,
        dto::{Actor, ContactMessageDto, Listing},
        error::ApplicationResult,
    },
    domain::policy::{Action, ResourceKind, ResourceRef},
};

impl ContactQueryService {
    /// Admin inbox: every submitted message with the total count.
    pub async fn list_messages(
        &self,
        actor: &Actor,
    ) -> ApplicationResult<Listing<ContactMessageDto>> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::AdminList,
            ResourceRef::collection(ResourceKind::ContactMessage),
        )
        .await?;

        let (messages, total) = self.contact_repo.list().await?;
        Ok(Listing::new(
            messages.into_iter().map(Into::into).collect(),
            total,
        ))
    }
}
