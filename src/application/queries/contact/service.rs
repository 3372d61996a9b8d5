use std::sync::Arc;

use crate::domain::{contact::ContactMessageRepository, user::UserRepository};

pub struct ContactQueryService {
    pub(super) contact_repo: Arc<dyn ContactMessageRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ContactQueryService {
    pub fn new(
        contact_repo: Arc<dyn ContactMessageRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            contact_repo,
            user_repo,
        }
    }
}
