use crate::domain::contact::ContactMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.into(),
            name: message.name.into(),
            email: message.email.to_string(),
            message: message.body.into(),
            submitted_at: message.submitted_at,
        }
    }
}
