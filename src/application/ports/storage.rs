// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::photo::StoredFilename;
use async_trait::async_trait;

/// Byte storage for uploaded photos. Names are always system-generated;
/// caller-supplied filenames never reach an implementation.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn write(&self, name: &StoredFilename, bytes: &[u8]) -> ApplicationResult<()>;

    /// Removing a file that is already gone is not an error.
    async fn remove(&self, name: &StoredFilename) -> ApplicationResult<()>;
}
