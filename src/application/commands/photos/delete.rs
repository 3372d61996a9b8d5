use super::PhotoCommandService;
use crate::{
    application::{
        access,
        dto::Actor,
        error::ApplicationResult,
    },
    domain::{
        photo::PhotoId,
        policy::{Action, ResourceKind, ResourceRef},
    },
};

pub struct DeletePhotoCommand {
    pub id: i64,
}

impl PhotoCommandService {
    /// Owner or admin. The record goes first; the file removal afterwards
    /// is best-effort, since an orphan file is recoverable while a row
    /// pointing at nothing is not.
    pub async fn delete_photo(
        &self,
        actor: &Actor,
        command: DeletePhotoCommand,
    ) -> ApplicationResult<()> {
        let id = PhotoId::new(command.id)?;
        let Some(photo) = self.photo_repo.find_by_id(id).await? else {
            return Ok(());
        };

        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Delete,
            ResourceRef::owned(ResourceKind::Photo, photo.owner_id),
        )
        .await?;

        self.photo_repo.delete(id).await?;
        if let Err(err) = self.photo_store.remove(&photo.filename).await {
            tracing::warn!(
                filename = %photo.filename,
                error = %err,
                "failed to remove photo file"
            );
        }

        tracing::info!(photo_id = i64::from(id), "photo deleted");
        Ok(())
    }
}
