// src/application/commands/contact/mod.rs
mod delete;
mod service;
mod submit;

pub use delete::DeleteContactMessageCommand;
pub use service::ContactCommandService;
pub use submit::SubmitContactMessageCommand;
