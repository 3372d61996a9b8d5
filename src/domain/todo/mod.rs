// src/domain/todo/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTodoItem, TodoItem, TodoUpdate};
pub use repository::TodoRepository;
pub use value_objects::{TodoId, TodoStatus, TodoText};
