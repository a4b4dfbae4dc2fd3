//! Cache invalidator implementations.

use async_trait::async_trait;
use tracing::debug;

use crate::error::InvalidationError;
use crate::traits::CacheInvalidator;

/// Invalidator that POSTs to a frontend revalidation endpoint.
///
/// Frontends that cache rendered views (e.g. an on-demand revalidation
/// route) expose a webhook; this invalidator hits it with the path that
/// changed. Best-effort: the caller logs failures and moves on.
pub struct WebhookInvalidator {
    client: reqwest::Client,
    base_url: String,
    secret: Option<String>,
}

impl WebhookInvalidator {
    /// Create an invalidator for the given revalidation endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            secret: None,
        }
    }

    /// Authenticate invalidation calls with a bearer secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[async_trait]
impl CacheInvalidator for WebhookInvalidator {
    async fn invalidate(&self, path: &str) -> Result<(), InvalidationError> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");

        if let Some(secret) = &self.secret {
            request = request.header("Authorization", format!("Bearer {}", secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| InvalidationError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InvalidationError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP {}", status),
            ))));
        }

        debug!(path = %path, "cache invalidated");
        Ok(())
    }
}

/// Invalidator that does nothing, for wiring without a frontend cache.
#[derive(Debug, Clone, Default)]
pub struct NoopInvalidator;

#[async_trait]
impl CacheInvalidator for NoopInvalidator {
    async fn invalidate(&self, _path: &str) -> Result<(), InvalidationError> {
        Ok(())
    }
}
