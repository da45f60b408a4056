use std::fmt;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Error, Result};

/// Supplies the bearer token of the signed-in user.
#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    /// Returns the token to attach to the next request.
    async fn current_token(&self) -> Result<String>;
}

/// A fixed token, e.g. one passed on the command line.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl AuthTokenProvider for StaticTokenProvider {
    async fn current_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Holds the token of whoever is currently signed in.
#[derive(Default)]
pub struct SessionTokenProvider {
    token: RwLock<Option<String>>,
}

impl SessionTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
        tracing::debug!("session token updated");
    }

    pub async fn sign_out(&self) {
        *self.token.write().await = None;
        tracing::debug!("session token cleared");
    }

    pub async fn is_signed_in(&self) -> bool {
        self.token.read().await.is_some()
    }
}

impl fmt::Debug for SessionTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl AuthTokenProvider for SessionTokenProvider {
    async fn current_token(&self) -> Result<String> {
        self.token
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::Auth("no user is signed in".to_string()))
    }
}
