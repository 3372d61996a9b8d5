use std::sync::Arc;

use crate::domain::{photo::PhotoRepository, user::UserRepository};

pub struct PhotoQueryService {
    pub(super) photo_repo: Arc<dyn PhotoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl PhotoQueryService {
    pub fn new(photo_repo: Arc<dyn PhotoRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            photo_repo,
            user_repo,
        }
    }
}
