use crate::domain::errors::DomainResult;
use crate::domain::photo::entity::{NewPhoto, Photo};
use crate::domain::photo::value_objects::{PhotoId, PhotoStatus};
use async_trait::async_trait;

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo>;

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>>;

    /// The public gallery: enabled photos only.
    async fn list_enabled(&self) -> DomainResult<Vec<Photo>>;

    /// Every photo regardless of state, with the total count.
    async fn list_all(&self) -> DomainResult<(Vec<Photo>, u64)>;

    async fn set_status(&self, id: PhotoId, status: PhotoStatus) -> DomainResult<Photo>;

    /// Removing an id that is already gone is not an error.
    async fn delete(&self, id: PhotoId) -> DomainResult<()>;
}
