use papel_core::{ArticleSummary, BecauseReason, Error, RecommendationResult, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::RecommendationClient;
use crate::view_model::RecommendationListViewModel;

/// Presents the detail view for a selected article.
pub trait Navigator: Send {
    fn open_article(&mut self, article_id: &str);
}

/// Drives the recommended-articles list: fetch on mount, navigate on selection.
///
/// Fetch failures never reach the list. They are logged and, if someone
/// subscribed, delivered on the error channel; the list keeps what it had.
pub struct RecommendationScreen<N: Navigator> {
    client: RecommendationClient,
    view_model: RecommendationListViewModel,
    navigator: N,
    errors: Option<mpsc::UnboundedSender<Error>>,
}

impl<N: Navigator> RecommendationScreen<N> {
    pub fn new(client: RecommendationClient, navigator: N) -> Self {
        Self {
            client,
            view_model: RecommendationListViewModel::new(),
            navigator,
            errors: None,
        }
    }

    /// Receives every fetch failure from now on. A new subscription replaces the old one.
    pub fn subscribe_errors(&mut self) -> mpsc::UnboundedReceiver<Error> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.errors = Some(tx);
        rx
    }

    pub async fn on_mount(&mut self) {
        let outcome = match self.request().await {
            Ok(outcome) => outcome,
            Err(e) => Err(Error::External(anyhow::anyhow!("fetch task failed: {}", e))),
        };
        self.complete(outcome);
    }

    /// Starts a fetch on the runtime and hands back its handle.
    ///
    /// Nothing stops a second request while one is in flight; whichever
    /// outcome is passed to `complete` last is what the list shows.
    pub fn request(&self) -> JoinHandle<Result<RecommendationResult>> {
        let client = self.client.clone();
        tokio::spawn(async move { client.fetch().await })
    }

    /// Applies a finished fetch. Returns whether the list was replaced.
    pub fn complete(&mut self, outcome: Result<RecommendationResult>) -> bool {
        match outcome {
            Ok(result) => {
                tracing::info!(articles = result.articles.len(), "recommendations loaded");
                self.view_model.replace(result);
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kept = self.view_model.item_count(),
                    "failed to load recommendations"
                );
                if let Some(errors) = &self.errors {
                    let _ = errors.send(e);
                }
                false
            }
        }
    }

    pub fn on_item_selected(&mut self, index: usize) -> Result<()> {
        let article_id = match self.view_model.article_id_at(index) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, "selection outside the rendered list");
                return Err(e);
            }
        };
        tracing::debug!(index, article_id, "opening article");
        self.navigator.open_article(article_id);
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.view_model.item_count()
    }

    pub fn summary_at(&self, index: usize) -> Result<&ArticleSummary> {
        self.view_model.summary_at(index)
    }

    pub fn because(&self) -> Option<&BecauseReason> {
        self.view_model.because()
    }

    pub fn view_model(&self) -> &RecommendationListViewModel {
        &self.view_model
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
