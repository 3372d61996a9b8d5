// src/domain/contact/entity.rs
use crate::domain::contact::value_objects::{ContactName, MessageBody, MessageId};
use crate::domain::user::EmailAddress;
use chrono::{DateTime, Utc};

/// A message left through the public contact form. Submitted by
/// unauthenticated visitors, so it has no owner.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: ContactName,
    pub email: EmailAddress,
    pub body: MessageBody,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: ContactName,
    pub email: EmailAddress,
    pub body: MessageBody,
    pub submitted_at: DateTime<Utc>,
}
