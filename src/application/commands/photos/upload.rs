// src/application/commands/photos/upload.rs
use super::PhotoCommandService;
use crate::{
    application::{
        access,
        dto::{Actor, PhotoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        photo::{ImageExtension, NewPhoto, PhotoStatus, PhotoTitle, StoredFilename},
        policy::{Action, ResourceKind, ResourceRef},
    },
};
use uuid::Uuid;

pub struct UploadPhotoCommand {
    pub title: String,
    /// As submitted by the browser; used only to take the extension.
    pub original_filename: String,
    pub content: Vec<u8>,
}

impl PhotoCommandService {
    /// Validate, then store bytes, then insert the record. All validation
    /// happens before anything touches the store, so a rejected upload
    /// leaves no file and no row behind.
    pub async fn upload_photo(
        &self,
        actor: &Actor,
        command: UploadPhotoCommand,
    ) -> ApplicationResult<PhotoDto> {
        access::authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Create,
            ResourceRef::collection(ResourceKind::Photo),
        )
        .await?;
        let owner = actor
            .user()
            .ok_or_else(|| ApplicationError::unauthorized("login required"))?;

        let title = PhotoTitle::new(command.title)?;
        if command.content.is_empty() {
            return Err(ApplicationError::validation("uploaded file is empty"));
        }
        let extension = ImageExtension::from_filename(&command.original_filename)?;

        // The stored name is always generated fresh; the submitted name is
        // discarded so it can never collide or traverse paths.
        let filename = StoredFilename::new(format!(
            "{}.{}",
            Uuid::new_v4().simple(),
            extension.as_str()
        ))?;

        self.photo_store.write(&filename, &command.content).await?;

        let new_photo = NewPhoto {
            title,
            filename: filename.clone(),
            status: PhotoStatus::Enabled,
            owner_id: owner.id,
            created_at: self.clock.now(),
        };

        let created = match self.photo_repo.insert(new_photo).await {
            Ok(photo) => photo,
            Err(err) => {
                // A failed insert must not leave the just-written bytes
                // behind.
                if let Err(cleanup) = self.photo_store.remove(&filename).await {
                    tracing::warn!(
                        filename = %filename,
                        error = %cleanup,
                        "failed to remove file after insert error"
                    );
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            photo_id = i64::from(created.id),
            owner_id = i64::from(created.owner_id),
            filename = %created.filename,
            "photo uploaded"
        );
        Ok(created.into())
    }
}
