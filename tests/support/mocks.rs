// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use verandah_core::application::error::{ApplicationError, ApplicationResult};
use verandah_core::application::ports::{
    security::PasswordHasher, storage::PhotoStore, time::Clock,
};
use verandah_core::domain::contact::{
    ContactMessage, ContactMessageRepository, MessageId, NewContactMessage,
};
use verandah_core::domain::errors::{DomainError, DomainResult};
use verandah_core::domain::photo::{
    NewPhoto, Photo, PhotoId, PhotoRepository, PhotoStatus, StoredFilename,
};
use verandah_core::domain::todo::{NewTodoItem, TodoId, TodoItem, TodoRepository, TodoUpdate};
use verandah_core::domain::user::{
    EmailAddress, NewUser, User, UserId, UserRepository, UserUpdate,
};

pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|user| user.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict(
                "email address already registered".into(),
            ));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id).unwrap(),
            email: new_user.email,
            display_name: new_user.display_name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            status: new_user.status,
            created_at: new_user.created_at,
        };
        map.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;

        if let Some(status) = update.status {
            user.status = status;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }

        Ok(user.clone())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let map = self.inner.lock().unwrap();
        let mut users: Vec<_> = map.values().cloned().collect();
        users.sort_by_key(|user| i64::from(user.id));
        Ok(users)
    }
}

pub struct InMemoryTodoRepo {
    inner: Mutex<HashMap<i64, TodoItem>>,
    next_id: AtomicI64,
}

impl InMemoryTodoRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepo {
    async fn insert(&self, item: NewTodoItem) -> DomainResult<TodoItem> {
        let mut map = self.inner.lock().unwrap();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = TodoItem {
            id: TodoId::new(id).unwrap(),
            text: item.text,
            status: item.status,
            owner_id: item.owner_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        map.insert(id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: TodoId) -> DomainResult<Option<TodoItem>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<TodoItem>> {
        let map = self.inner.lock().unwrap();
        let mut items: Vec<_> = map
            .values()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect();
        items.sort_by_key(|item| i64::from(item.id));
        Ok(items)
    }

    async fn list_all(&self) -> DomainResult<(Vec<TodoItem>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut items: Vec<_> = map.values().cloned().collect();
        items.sort_by_key(|item| i64::from(item.id));
        let total = items.len() as u64;
        Ok((items, total))
    }

    async fn update(&self, update: TodoUpdate) -> DomainResult<TodoItem> {
        let mut map = self.inner.lock().unwrap();
        let item = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;

        if let Some(text) = update.text {
            item.text = text;
        }
        if let Some(status) = update.status {
            item.status = status;
        }
        item.updated_at = update.updated_at;

        Ok(item.clone())
    }

    async fn delete(&self, id: TodoId) -> DomainResult<()> {
        self.inner.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}

pub struct InMemoryPhotoRepo {
    inner: Mutex<HashMap<i64, Photo>>,
    next_id: AtomicI64,
}

impl InMemoryPhotoRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl PhotoRepository for InMemoryPhotoRepo {
    async fn insert(&self, photo: NewPhoto) -> DomainResult<Photo> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|existing| existing.filename == photo.filename)
        {
            return Err(DomainError::Conflict(
                "stored filename already in use".into(),
            ));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let photo = Photo {
            id: PhotoId::new(id).unwrap(),
            title: photo.title,
            filename: photo.filename,
            status: photo.status,
            owner_id: photo.owner_id,
            created_at: photo.created_at,
        };
        map.insert(id, photo.clone());
        Ok(photo)
    }

    async fn find_by_id(&self, id: PhotoId) -> DomainResult<Option<Photo>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn list_enabled(&self) -> DomainResult<Vec<Photo>> {
        let map = self.inner.lock().unwrap();
        let mut photos: Vec<_> = map
            .values()
            .filter(|photo| photo.status.is_enabled())
            .cloned()
            .collect();
        photos.sort_by_key(|photo| i64::from(photo.id));
        Ok(photos)
    }

    async fn list_all(&self) -> DomainResult<(Vec<Photo>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut photos: Vec<_> = map.values().cloned().collect();
        photos.sort_by_key(|photo| i64::from(photo.id));
        let total = photos.len() as u64;
        Ok((photos, total))
    }

    async fn set_status(&self, id: PhotoId, status: PhotoStatus) -> DomainResult<Photo> {
        let mut map = self.inner.lock().unwrap();
        let photo = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;
        photo.status = status;
        Ok(photo.clone())
    }

    async fn delete(&self, id: PhotoId) -> DomainResult<()> {
        self.inner.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}

pub struct InMemoryContactRepo {
    inner: Mutex<HashMap<i64, ContactMessage>>,
    next_id: AtomicI64,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactRepo {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let mut map = self.inner.lock().unwrap();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let message = ContactMessage {
            id: MessageId::new(id).unwrap(),
            name: message.name,
            email: message.email,
            body: message.body,
            submitted_at: message.submitted_at,
        };
        map.insert(id, message.clone());
        Ok(message)
    }

    async fn list(&self) -> DomainResult<(Vec<ContactMessage>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut messages: Vec<_> = map.values().cloned().collect();
        messages.sort_by_key(|message| i64::from(message.id));
        let total = messages.len() as u64;
        Ok((messages, total))
    }

    async fn delete(&self, id: MessageId) -> DomainResult<()> {
        self.inner.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}

/// Records writes in memory so tests can assert exactly which files exist.
#[derive(Default)]
pub struct RecordingPhotoStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl RecordingPhotoStore {
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl PhotoStore for RecordingPhotoStore {
    async fn write(&self, name: &StoredFilename, bytes: &[u8]) -> ApplicationResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(name.as_str().to_owned(), bytes.to_vec());
        Ok(())
    }

    async fn remove(&self, name: &StoredFilename) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(name.as_str());
        Ok(())
    }
}

/// Hashes are the password with a marker prefix; verification is string
/// equality. Keeps account tests fast and deterministic.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed::{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
