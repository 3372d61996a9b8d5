// src/application/commands/photos/service.rs
use std::sync::Arc;

use crate::application::ports::{storage::PhotoStore, time::Clock};
use crate::domain::{photo::PhotoRepository, user::UserRepository};

pub struct PhotoCommandService {
    pub(super) photo_repo: Arc<dyn PhotoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) photo_store: Arc<dyn PhotoStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PhotoCommandService {
    pub fn new(
        photo_repo: Arc<dyn PhotoRepository>,
        user_repo: Arc<dyn UserRepository>,
        photo_store: Arc<dyn PhotoStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            photo_repo,
            user_repo,
            photo_store,
            clock,
        }
    }
}
