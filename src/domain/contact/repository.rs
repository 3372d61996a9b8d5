use crate::domain::contact::entity::{ContactMessage, NewContactMessage};
use crate::domain::contact::value_objects::MessageId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;

    /// Every message, oldest first, with the total count.
    async fn list(&self) -> DomainResult<(Vec<ContactMessage>, u64)>;

    /// Removing an id that is already gone is not an error.
    async fn delete(&self, id: MessageId) -> DomainResult<()>;
}
