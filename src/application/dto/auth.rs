use crate::domain::user::{Role, User, UserId};

/// The identity a request is acting as, established by `login` and carried
/// by the request layer. Role and active state are advisory here; every
/// guarded operation re-reads the user row before deciding anything.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            display_name: user.display_name.to_string(),
            role: user.role,
        }
    }
}

/// Explicit actor context threaded into every service call; there is no
/// ambient current-user state anywhere in the crate.
#[derive(Debug, Clone)]
pub enum Actor {
    Anonymous,
    User(AuthenticatedUser),
}

impl Actor {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Actor::Anonymous => None,
            Actor::User(user) => Some(user),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }
}
