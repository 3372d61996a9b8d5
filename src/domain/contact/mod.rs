// src/domain/contact/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContactMessage, NewContactMessage};
pub use repository::ContactMessageRepository;
pub use value_objects::{ContactName, MessageBody, MessageId};
