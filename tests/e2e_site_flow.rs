// tests/e2e_site_flow.rs
// The whole stack end to end: SQLite repositories, Argon2 hashing, and the
// filesystem photo store, driven the way the request layer would drive it.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;
use verandah_core::application::{
    commands::{
        contact::SubmitContactMessageCommand,
        photos::{SetPhotoStateCommand, UploadPhotoCommand},
        todos::{CreateTodoCommand, UpdateTodoCommand},
        users::{LoginCommand, RegisterUserCommand},
    },
    dto::Actor,
    error::ApplicationError,
    services::ApplicationServices,
};
use verandah_core::infrastructure::{
    database,
    repositories::{
        SqliteContactMessageRepository, SqlitePhotoRepository, SqliteTodoRepository,
        SqliteUserRepository,
    },
    security::password::Argon2PasswordHasher,
    storage::FsPhotoStore,
    time::SystemClock,
};

async fn real_stack() -> (ApplicationServices, std::path::PathBuf) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .unwrap();
    database::run_migrations(&pool).await.unwrap();
    let pool = Arc::new(pool);

    let upload_dir = std::env::temp_dir().join(format!("verandah-e2e-{}", Uuid::new_v4()));
    let services = ApplicationServices::new(
        Arc::new(SqliteUserRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteTodoRepository::new(Arc::clone(&pool))),
        Arc::new(SqlitePhotoRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteContactMessageRepository::new(Arc::clone(&pool))),
        Arc::new(Argon2PasswordHasher::default()),
        Arc::new(FsPhotoStore::new(upload_dir.clone())),
        Arc::new(SystemClock::default()),
    );
    (services, upload_dir)
}

#[tokio::test]
async fn a_day_on_the_site() {
    let (services, upload_dir) = real_stack().await;

    // The site owner registers first and becomes the admin.
    services
        .user_commands
        .register(RegisterUserCommand {
            email: "admin@example.org".into(),
            display_name: "Site Owner".into(),
            password: "a long admin secret".into(),
        })
        .await
        .unwrap();
    let admin = Actor::User(
        services
            .user_commands
            .login(LoginCommand {
                email: "admin@example.org".into(),
                password: "a long admin secret".into(),
            })
            .await
            .unwrap(),
    );

    // A visitor registers, signs in, and keeps a to-do list.
    services
        .user_commands
        .register(RegisterUserCommand {
            email: "member@example.org".into(),
            display_name: "Member".into(),
            password: "a long member secret".into(),
        })
        .await
        .unwrap();
    let member = Actor::User(
        services
            .user_commands
            .login(LoginCommand {
                email: "member@example.org".into(),
                password: "a long member secret".into(),
            })
            .await
            .unwrap(),
    );

    let todo = services
        .todo_commands
        .create_todo(
            &member,
            CreateTodoCommand {
                text: "hang the new photos".into(),
            },
        )
        .await
        .unwrap();
    let done = services
        .todo_commands
        .update_todo(
            &member,
            UpdateTodoCommand {
                id: todo.id,
                text: None,
                done: Some(true),
            },
        )
        .await
        .unwrap();
    assert!(done.done);

    // The member uploads a photo; the stored file carries a generated name.
    let photo = services
        .photo_commands
        .upload_photo(
            &member,
            UploadPhotoCommand {
                title: "Garden".into(),
                original_filename: "garden.JPEG".into(),
                content: vec![1, 2, 3, 4],
            },
        )
        .await
        .unwrap();
    assert!(upload_dir.join(&photo.filename).exists());
    assert_ne!(photo.filename, "garden.JPEG");

    // Everyone sees it until the admin takes it down.
    assert_eq!(
        services.photo_queries.gallery(&Actor::Anonymous).await.unwrap().len(),
        1
    );
    services
        .photo_commands
        .set_photo_state(
            &admin,
            SetPhotoStateCommand {
                id: photo.id,
                enabled: false,
            },
        )
        .await
        .unwrap();
    assert!(
        services
            .photo_queries
            .gallery(&Actor::Anonymous)
            .await
            .unwrap()
            .is_empty()
    );
    let all = services.photo_queries.list_all(&admin).await.unwrap();
    assert_eq!(all.total, 1);

    // An anonymous visitor leaves a message only the admin can read.
    services
        .contact_commands
        .submit_message(
            &Actor::Anonymous,
            SubmitContactMessageCommand {
                name: "Passer-by".into(),
                email: "passerby@example.org".into(),
                message: "Lovely garden photos!".into(),
            },
        )
        .await
        .unwrap();
    let err = services
        .contact_queries
        .list_messages(&member)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
    let inbox = services.contact_queries.list_messages(&admin).await.unwrap();
    assert_eq!(inbox.total, 1);

    // The member cannot reach into admin territory.
    let err = services
        .photo_commands
        .toggle_photo_state(&member, photo.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    std::fs::remove_dir_all(&upload_dir).ok();
}
