// src/application/access.rs
use crate::application::dto::Actor;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::policy::{self, Action, Decision, Principal, PrincipalUser, ResourceRef};
use crate::domain::user::UserRepository;

/// Resolve an actor to a policy principal. The user row is re-read on
/// every call so that disabling an account takes effect on the next
/// action, not at the next login.
pub async fn resolve_principal(
    user_repo: &dyn UserRepository,
    actor: &Actor,
) -> ApplicationResult<Principal> {
    match actor {
        Actor::Anonymous => Ok(Principal::Anonymous),
        Actor::User(user) => {
            let current = user_repo
                .find_by_id(user.id)
                .await?
                .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;
            Ok(Principal::User(PrincipalUser {
                id: current.id,
                role: current.role,
                active: current.status.is_active(),
            }))
        }
    }
}

/// The one gate in front of every guarded operation: resolve, evaluate,
/// and turn a denial into the error the request layer renders.
pub async fn authorize(
    user_repo: &dyn UserRepository,
    actor: &Actor,
    action: Action,
    resource: ResourceRef,
) -> ApplicationResult<()> {
    let principal = resolve_principal(user_repo, actor).await?;
    match policy::evaluate(&principal, action, &resource) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(denial(&principal, action, &resource)),
    }
}

fn denial(principal: &Principal, action: Action, resource: &ResourceRef) -> ApplicationError {
    match principal {
        Principal::Anonymous => ApplicationError::unauthorized("login required"),
        Principal::User(user) if !user.active => {
            ApplicationError::forbidden("account is disabled")
        }
        Principal::User(_) => ApplicationError::forbidden(format!(
            "not permitted to {action} this {}",
            resource.kind
        )),
    }
}
