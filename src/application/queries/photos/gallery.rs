// src/application/queries/photos/gallery.rs
use super::PhotoQueryService;
use crate::{
    application::{
        access,
        dto::{Actor, PhotoDto},
        error::ApplicationResult,
    },
    domain::policy::{Action, ResourceKind, ResourceRef},
};

impl PhotoQueryService {
    /// The public gallery. Disabled photos are filtered out for every
    /// actor; admins see them through `list_all` instead.
    pub async fn gallery(&self, actor: &Actor) -> ApplicationResult<Vec<PhotoDto>> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::ReadPublic,
            ResourceRef::collection(ResourceKind::Photo),
        )
        .await?;

        let photos = self.photo_repo.list_enabled().await?;
        Ok(photos.into_iter().map(Into::into).collect())
    }
}
