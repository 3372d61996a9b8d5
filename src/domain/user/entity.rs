// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{
    AccountStatus, DisplayName, EmailAddress, PasswordHash, Role, UserId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub display_name: DisplayName,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn activate(&mut self) {
        self.status = AccountStatus::Active;
    }

    pub fn deactivate(&mut self) {
        self.status = AccountStatus::Disabled;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub display_name: DisplayName,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: EmailAddress,
        display_name: DisplayName,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            email,
            display_name,
            password_hash,
            role,
            status: AccountStatus::Active,
            created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub status: Option<AccountStatus>,
    pub role: Option<Role>,
    pub password_hash: Option<PasswordHash>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            status: None,
            role: None,
            password_hash: None,
        }
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }
}
