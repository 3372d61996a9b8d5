// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_contact;
mod sqlite_photo;
mod sqlite_todo;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_contact::SqliteContactMessageRepository;
pub use sqlite_photo::SqlitePhotoRepository;
pub use sqlite_todo::SqliteTodoRepository;
pub use sqlite_user::SqliteUserRepository;
