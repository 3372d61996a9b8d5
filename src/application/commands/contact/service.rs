use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{contact::ContactMessageRepository, user::UserRepository};

pub struct ContactCommandService {
    pub(super) contact_repo: Arc<dyn ContactMessageRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(
        contact_repo: Arc<dyn ContactMessageRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contact_repo,
            user_repo,
            clock,
        }
    }
}
