// src/application/commands/todos/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTodoCommand;
pub use delete::DeleteTodoCommand;
pub use service::TodoCommandService;
pub use update::UpdateTodoCommand;
