// src/application/queries/photos/get_by_id.rs
use super::PhotoQueryService;
use crate::{
    application::{
        access,
        dto::{Actor, PhotoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::policy::{self, Action, ResourceKind, ResourceRef},
};

impl PhotoQueryService {
    /// An enabled photo is visible to anyone. A disabled one stays
    /// visible to its owner and to admins, and is reported as missing to
    /// everybody else.
    pub async fn get_photo(&self, actor: &Actor, id: i64) -> ApplicationResult<PhotoDto> {
        let id = crate::domain::photo::PhotoId::new(id)?;
        let photo = self
            .photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("photo not found"))?;

        if photo.status.is_enabled() {
            return Ok(photo.into());
        }

        let principal = access::resolve_principal(self.user_repo.as_ref(), actor).await?;
        let owner_view = policy::evaluate(
            &principal,
            Action::ReadOwn,
            &ResourceRef::owned(ResourceKind::Photo, photo.owner_id),
        );
        let admin_view = policy::evaluate(
            &principal,
            Action::AdminList,
            &ResourceRef::collection(ResourceKind::Photo),
        );

        if owner_view.is_allowed() || admin_view.is_allowed() {
            Ok(photo.into())
        } else {
            Err(ApplicationError::not_found("photo not found"))
        }
    }
}
