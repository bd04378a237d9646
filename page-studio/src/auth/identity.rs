//! Identity collaborator
//!
//! The engine never authenticates anyone; it asks the session provider who
//! the current actor is and maps absence to `NotAuthenticated`.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::{Actor, Role};

use crate::security_log;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `None` when there is no session or it has expired
    async fn current_actor(&self) -> Option<Actor>;
}

/// Current actor, or `NotAuthenticated` (distinct from `PermissionDenied`)
pub async fn require_actor(identity: &dyn IdentityProvider) -> AppResult<Actor> {
    match identity.current_actor().await {
        Some(actor) => Ok(actor),
        None => {
            security_log!("WARN", "auth_missing", operation = "require_actor");
            Err(AppError::not_authenticated())
        }
    }
}

/// Fixed session, switched explicitly. Used by the binary and tests.
#[derive(Debug, Default)]
pub struct StaticIdentity {
    actor: RwLock<Option<Actor>>,
}

impl StaticIdentity {
    pub fn signed_in(id: impl Into<String>, role: Role) -> Self {
        Self {
            actor: RwLock::new(Some(Actor::new(id, role))),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, actor: Actor) {
        *self.actor.write() = Some(actor);
    }

    pub fn sign_out(&self) {
        *self.actor.write() = None;
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_actor(&self) -> Option<Actor> {
        self.actor.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[tokio::test]
    async fn test_signed_out_is_unauthenticated() {
        let identity = StaticIdentity::signed_out();
        let err = require_actor(&identity).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let identity = StaticIdentity::signed_in("u1", Role::Editor);
        assert_eq!(require_actor(&identity).await.unwrap().role, Role::Editor);

        identity.sign_out();
        assert!(require_actor(&identity).await.is_err());

        identity.sign_in(Actor::new("u2", Role::Admin));
        assert_eq!(require_actor(&identity).await.unwrap().id, "u2");
    }
}
