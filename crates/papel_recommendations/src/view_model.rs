use papel_core::{ArticleSummary, BecauseReason, Error, RecommendationResult, Result};

/// The list currently shown by a recommendations screen.
///
/// Each `replace` discards whatever was held before; there is no merging.
#[derive(Debug, Default)]
pub struct RecommendationListViewModel {
    because: Option<BecauseReason>,
    articles: Vec<ArticleSummary>,
}

impl RecommendationListViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, result: RecommendationResult) {
        self.because = Some(result.because);
        self.articles = result.articles;
    }

    pub fn item_count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn summary_at(&self, index: usize) -> Result<&ArticleSummary> {
        self.articles.get(index).ok_or(Error::Index {
            index,
            len: self.articles.len(),
        })
    }

    pub fn article_id_at(&self, index: usize) -> Result<&str> {
        self.summary_at(index).map(|summary| summary.id.as_str())
    }

    pub fn summaries(&self) -> &[ArticleSummary] {
        &self.articles
    }

    /// Justification of the batch currently held, if any batch arrived yet.
    pub fn because(&self) -> Option<&BecauseReason> {
        self.because.as_ref()
    }
}
