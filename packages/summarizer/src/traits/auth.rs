//! Authentication resolver trait.

use async_trait::async_trait;

use crate::error::AuthError;

/// Authenticated user identity.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    /// Stable user id from the auth backend
    pub user_id: String,
}

impl AuthUser {
    /// Create an identity with the given user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Resolves the identity of the current caller.
///
/// `Ok(None)` means "no authenticated user" and is handled as a normal
/// outcome, not an error. `Err` means the auth backend itself failed.
#[async_trait]
pub trait AuthResolver: Send + Sync {
    /// Resolve the current authenticated user, if any.
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;
}
