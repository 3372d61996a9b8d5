// tests/support/helpers.rs
use std::sync::Arc;

use verandah_core::application::{
    commands::users::{LoginCommand, RegisterUserCommand},
    dto::{Actor, UserDto},
    error::ApplicationError,
    ports::storage::PhotoStore,
    services::ApplicationServices,
};
use verandah_core::domain::errors::DomainError;

use super::mocks::{
    DummyPasswordHasher, FixedClock, InMemoryContactRepo, InMemoryPhotoRepo, InMemoryTodoRepo,
    InMemoryUserRepo, RecordingPhotoStore,
};

pub const TEST_PASSWORD: &str = "correct horse battery";

pub struct TestSite {
    pub services: ApplicationServices,
    pub photo_store: Arc<RecordingPhotoStore>,
}

/// A full service stack over in-memory fakes.
pub fn test_site() -> TestSite {
    let user_repo = Arc::new(InMemoryUserRepo::new());
    let todo_repo = Arc::new(InMemoryTodoRepo::new());
    let photo_repo = Arc::new(InMemoryPhotoRepo::new());
    let contact_repo = Arc::new(InMemoryContactRepo::new());
    let photo_store = Arc::new(RecordingPhotoStore::default());

    let services = ApplicationServices::new(
        user_repo,
        todo_repo,
        photo_repo,
        contact_repo,
        Arc::new(DummyPasswordHasher),
        Arc::clone(&photo_store) as Arc<dyn PhotoStore>,
        Arc::new(FixedClock::default()),
    );

    TestSite {
        services,
        photo_store,
    }
}

pub async fn register(site: &TestSite, email: &str, display_name: &str) -> UserDto {
    site.services
        .user_commands
        .register(RegisterUserCommand {
            email: email.into(),
            display_name: display_name.into(),
            password: TEST_PASSWORD.into(),
        })
        .await
        .expect("registration failed")
}

pub async fn login(site: &TestSite, email: &str) -> Actor {
    let auth = site
        .services
        .user_commands
        .login(LoginCommand {
            email: email.into(),
            password: TEST_PASSWORD.into(),
        })
        .await
        .expect("login failed");
    Actor::User(auth)
}

/// A site whose first (admin) account is already registered and signed in.
pub async fn site_with_admin() -> (TestSite, Actor) {
    let site = test_site();
    register(&site, "admin@example.org", "Admin").await;
    let admin = login(&site, "admin@example.org").await;
    (site, admin)
}

/// Field validation surfaces either as an application-level validation
/// error or as a domain validation error lifted through `Domain`.
pub fn is_validation(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_))
    )
}
