use serde::{Deserialize, Serialize};

/// The fields needed to render one list row and open its detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The article that justified a recommendation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BecauseReason {
    pub article_id: String,
    pub title: String,
}

/// One server response: a justification plus articles in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub because: BecauseReason,
    pub articles: Vec<ArticleSummary>,
}
