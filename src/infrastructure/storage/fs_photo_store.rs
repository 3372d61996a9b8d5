// src/infrastructure/storage/fs_photo_store.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::PhotoStore,
};
use crate::domain::photo::StoredFilename;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Photo bytes on the local filesystem, one file per photo under a single
/// upload directory. Names come in already generated, so concurrent
/// uploads cannot collide.
pub struct FsPhotoStore {
    root: PathBuf,
}

impl FsPhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &StoredFilename) -> PathBuf {
        self.root.join(name.as_str())
    }

    async fn ensure_root(&self) -> ApplicationResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).await.map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "failed to create upload directory {}: {err}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoStore for FsPhotoStore {
    async fn write(&self, name: &StoredFilename, bytes: &[u8]) -> ApplicationResult<()> {
        self.ensure_root().await?;
        let path = self.path_for(name);
        fs::write(&path, bytes).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to write {}: {err}",
                path.display()
            ))
        })?;
        tracing::debug!(path = %path.display(), "stored photo bytes");
        Ok(())
    }

    async fn remove(&self, name: &StoredFilename) -> ApplicationResult<()> {
        let path = self.path_for(name);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "failed to remove {}: {err}",
                path.display()
            ))),
        }
    }
}
