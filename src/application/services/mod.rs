// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            contact::ContactCommandService, photos::PhotoCommandService,
            todos::TodoCommandService, users::UserCommandService,
        },
        ports::{security::PasswordHasher, storage::PhotoStore, time::Clock},
        queries::{
            contact::ContactQueryService, photos::PhotoQueryService, todos::TodoQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        contact::ContactMessageRepository, photo::PhotoRepository, todo::TodoRepository,
        user::UserRepository,
    },
};

/// Everything the request layer needs, wired from the repositories and
/// ports chosen at startup.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub todo_commands: Arc<TodoCommandService>,
    pub photo_commands: Arc<PhotoCommandService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub todo_queries: Arc<TodoQueryService>,
    pub photo_queries: Arc<PhotoQueryService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        todo_repo: Arc<dyn TodoRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        photo_store: Arc<dyn PhotoStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));

        let todo_commands = Arc::new(TodoCommandService::new(
            Arc::clone(&todo_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let photo_commands = Arc::new(PhotoCommandService::new(
            Arc::clone(&photo_repo),
            Arc::clone(&user_repo),
            Arc::clone(&photo_store),
            Arc::clone(&clock),
        ));

        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let todo_queries = Arc::new(TodoQueryService::new(
            Arc::clone(&todo_repo),
            Arc::clone(&user_repo),
        ));
        let photo_queries = Arc::new(PhotoQueryService::new(
            Arc::clone(&photo_repo),
            Arc::clone(&user_repo),
        ));
        let contact_queries = Arc::new(ContactQueryService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&user_repo),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            todo_commands,
            photo_commands,
            contact_commands,
            todo_queries,
            photo_queries,
            contact_queries,
            user_queries,
        }
    }
}
