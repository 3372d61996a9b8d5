// src/domain/policy.rs
//! The single decision point for who may do what. Every guarded service
//! operation builds a [`Principal`] from the current user row and asks
//! [`evaluate`]; privilege rules live nowhere else.

use crate::domain::user::{Role, UserId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    ReadOwn,
    ReadPublic,
    Update,
    Delete,
    ToggleEnable,
    AdminList,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::ReadOwn => "read",
            Action::ReadPublic => "view",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::ToggleEnable => "enable or disable",
            Action::AdminList => "list",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Identity,
    Todo,
    Photo,
    ContactMessage,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Identity => "account",
            ResourceKind::Todo => "to-do item",
            ResourceKind::Photo => "photo",
            ResourceKind::ContactMessage => "contact message",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The target of a policy decision: a resource kind and, when the action
/// concerns one concrete record, its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub owner: Option<UserId>,
}

impl ResourceRef {
    /// A whole collection, or a record that has no owner.
    pub fn collection(kind: ResourceKind) -> Self {
        Self { kind, owner: None }
    }

    pub fn owned(kind: ResourceKind, owner: UserId) -> Self {
        Self {
            kind,
            owner: Some(owner),
        }
    }
}

/// Snapshot of the acting identity taken from the current user row, not
/// from whatever the session was issued with. Disabling an account must
/// bite on the very next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrincipalUser {
    pub id: UserId,
    pub role: Role,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User(PrincipalUser),
}

impl Principal {
    /// The principal as someone allowed to act while signed in. An
    /// inactive account is indistinguishable from no account at all.
    fn acting_user(&self) -> Option<&PrincipalUser> {
        match self {
            Principal::Anonymous => None,
            Principal::User(user) if user.active => Some(user),
            Principal::User(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Evaluate an actor/action/resource triple. Denies by default: any
/// combination not named below is refused.
pub fn evaluate(principal: &Principal, action: Action, resource: &ResourceRef) -> Decision {
    // Open to everyone, signed in or not: leaving a contact message,
    // registering an account, and browsing the public gallery. Public
    // gallery reads still exclude disabled photos; that filter is applied
    // by the query, not here.
    match (resource.kind, action) {
        (ResourceKind::ContactMessage, Action::Create)
        | (ResourceKind::Identity, Action::Create)
        | (ResourceKind::Photo, Action::ReadPublic) => return Decision::Allow,
        _ => {}
    }

    let Some(user) = principal.acting_user() else {
        return Decision::Deny;
    };

    // Admin bypass covers exactly the listed actions. Identities are never
    // deleted, and admin password resets arrive as Update on an identity.
    if user.role.is_admin() {
        match action {
            Action::AdminList | Action::ToggleEnable => return Decision::Allow,
            Action::Delete if resource.kind != ResourceKind::Identity => {
                return Decision::Allow;
            }
            Action::Update if resource.kind == ResourceKind::Identity => {
                return Decision::Allow;
            }
            _ => {}
        }
    }

    match (resource.kind, action) {
        (ResourceKind::Todo | ResourceKind::Photo, Action::Create) => Decision::Allow,
        (
            ResourceKind::Todo | ResourceKind::Photo,
            Action::Update | Action::Delete | Action::ReadOwn,
        )
        | (ResourceKind::Identity, Action::Update | Action::ReadOwn) => match resource.owner {
            Some(owner) if owner == user.id => Decision::Allow,
            _ => Decision::Deny,
        },
        _ => Decision::Deny,
    }
}
