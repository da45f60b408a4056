use std::fmt;
use std::sync::Arc;

use papel_core::{AuthTokenProvider, ClientConfig, Error, RecommendationResult, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use url::Url;

use crate::parser;

/// Issues the authenticated GET for a user's recommended articles.
#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    endpoint: Url,
    tokens: Arc<dyn AuthTokenProvider>,
}

impl RecommendationClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn AuthTokenProvider>) -> Result<Self> {
        Self::with_client(Client::new(), config, tokens)
    }

    pub fn with_client(
        client: Client,
        config: &ClientConfig,
        tokens: Arc<dyn AuthTokenProvider>,
    ) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: config.articles_url()?,
            tokens,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches one batch using the provider's current token.
    pub async fn fetch(&self) -> Result<RecommendationResult> {
        let token = self.tokens.current_token().await?;
        self.fetch_with_token(&token).await
    }

    /// Fetches one batch with an explicit bearer token.
    ///
    /// Either a fully parsed batch or a single error comes back; there is no retry.
    pub async fn fetch_with_token(&self, token: &str) -> Result<RecommendationResult> {
        if token.trim().is_empty() {
            return Err(Error::Auth("bearer token is empty".to_string()));
        }

        tracing::debug!(endpoint = %self.endpoint, "requesting recommendations");
        let body = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let result = parser::parse(&body)?;
        tracing::debug!(
            articles = result.articles.len(),
            because = %result.because.article_id,
            "recommendations received"
        );
        Ok(result)
    }
}

impl fmt::Debug for RecommendationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationClient")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}
