//! Auth resolver implementations.
//!
//! The library resolves identity behind the [`AuthResolver`] trait; an
//! embedding server backs it with whatever verifies its session tokens
//! (JWT middleware, session cookies). The resolver here covers wiring where
//! the identity is known at construction time: CLI tools, workers, tests.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::traits::{AuthResolver, AuthUser};

/// Resolver with a fixed identity decided at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthResolver {
    user: Option<AuthUser>,
}

impl StaticAuthResolver {
    /// Resolver that always answers with the given user.
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user: Some(AuthUser::new(user_id)),
        }
    }

    /// Resolver that always answers "no authenticated user".
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl AuthResolver for StaticAuthResolver {
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        Ok(self.user.clone())
    }
}
