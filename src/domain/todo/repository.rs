use crate::domain::errors::DomainResult;
use crate::domain::todo::entity::{NewTodoItem, TodoItem, TodoUpdate};
use crate::domain::todo::value_objects::TodoId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, item: NewTodoItem) -> DomainResult<TodoItem>;

    async fn find_by_id(&self, id: TodoId) -> DomainResult<Option<TodoItem>>;

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<TodoItem>>;

    /// Every item regardless of owner, with the total count.
    async fn list_all(&self) -> DomainResult<(Vec<TodoItem>, u64)>;

    async fn update(&self, update: TodoUpdate) -> DomainResult<TodoItem>;

    /// Removing an id that is already gone is not an error.
    async fn delete(&self, id: TodoId) -> DomainResult<()>;
}
