// tests/support/builders.rs
use chrono::Utc;

use verandah_core::domain::contact::{ContactName, MessageBody, NewContactMessage};
use verandah_core::domain::photo::{NewPhoto, PhotoStatus, PhotoTitle, StoredFilename};
use verandah_core::domain::todo::{NewTodoItem, TodoStatus, TodoText};
use verandah_core::domain::user::{
    DisplayName, EmailAddress, NewUser, PasswordHash, Role, UserId,
};

pub fn new_user(email: &str, role: Role) -> NewUser {
    NewUser::new(
        EmailAddress::new(email).unwrap(),
        DisplayName::new("Someone").unwrap(),
        PasswordHash::new("hash").unwrap(),
        role,
        Utc::now(),
    )
    .unwrap()
}

pub fn new_todo(owner_id: UserId, text: &str) -> NewTodoItem {
    let now = Utc::now();
    NewTodoItem {
        text: TodoText::new(text).unwrap(),
        status: TodoStatus::Open,
        owner_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn new_photo(owner_id: UserId, title: &str, filename: &str) -> NewPhoto {
    NewPhoto {
        title: PhotoTitle::new(title).unwrap(),
        filename: StoredFilename::new(filename).unwrap(),
        status: PhotoStatus::Enabled,
        owner_id,
        created_at: Utc::now(),
    }
}

pub fn new_message(name: &str, body: &str) -> NewContactMessage {
    NewContactMessage {
        name: ContactName::new(name).unwrap(),
        email: EmailAddress::new("visitor@example.org").unwrap(),
        body: MessageBody::new(body).unwrap(),
        submitted_at: Utc::now(),
    }
}
