// src/application/commands/photos/state.rs
use super::PhotoCommandService;
use crate::{
    application::{
        access,
        dto::{Actor, PhotoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        photo::{PhotoId, PhotoStatus},
        policy::{Action, ResourceKind, ResourceRef},
    },
};

pub struct SetPhotoStateCommand {
    pub id: i64,
    pub enabled: bool,
}

impl PhotoCommandService {
    /// Admin-only. The privilege check needs no resource, so a non-admin
    /// gets Forbidden even for ids that do not exist.
    pub async fn set_photo_state(
        &self,
        actor: &Actor,
        command: SetPhotoStateCommand,
    ) -> ApplicationResult<PhotoDto> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::ToggleEnable,
            ResourceRef::collection(ResourceKind::Photo),
        )
        .await?;

        let id = PhotoId::new(command.id)?;
        let photo = self
            .photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("photo not found"))?;

        let target = PhotoStatus::from_flag(command.enabled);
        if photo.status == target {
            return Ok(photo.into());
        }

        let updated = self.photo_repo.set_status(id, target).await?;
        tracing::info!(
            photo_id = i64::from(id),
            enabled = updated.status.is_enabled(),
            "photo state changed"
        );
        Ok(updated.into())
    }

    /// Flip whatever the current state is. Two concurrent toggles race
    /// last-write-wins; the write itself is one statement.
    pub async fn toggle_photo_state(&self, actor: &Actor, id: i64) -> ApplicationResult<PhotoDto> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::ToggleEnable,
            ResourceRef::collection(ResourceKind::Photo),
        )
        .await?;

        let id = PhotoId::new(id)?;
        let photo = self
            .photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("photo not found"))?;

        let updated = self
            .photo_repo
            .set_status(id, photo.status.toggled())
            .await?;
        tracing::info!(
            photo_id = i64::from(id),
            enabled = updated.status.is_enabled(),
            "photo state toggled"
        );
        Ok(updated.into())
    }
}
