use super::PhotoQueryService;
use crate::{
    application::{
        access,
        dto::{Actor, Listing, PhotoDto},
        error::ApplicationResult,
    },
    domain::policy::{Action, ResourceKind, ResourceRef},
};

impl PhotoQueryService {
    /// Admin view: every photo regardless of state, with the total count.
    pub async fn list_all(&self, actor: &Actor) -> ApplicationResult<Listing<PhotoDto>> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::AdminList,
            ResourceRef::collection(ResourceKind::Photo),
        )
        .await?;

        let (photos, total) = self.photo_repo.list_all().await?;
        Ok(Listing::new(
            photos.into_iter().map(Into::into).collect(),
            total,
        ))
    }
}
