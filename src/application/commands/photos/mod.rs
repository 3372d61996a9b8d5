// src/application/commands/photos/mod.rs
mod delete;
mod service;
mod state;
mod upload;

pub use delete::DeletePhotoCommand;
pub use service::PhotoCommandService;
pub use state::SetPhotoStateCommand;
pub use upload::UploadPhotoCommand;
