use papel_core::{ArticleSummary, BecauseReason, RecommendationResult, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct RecommendationResponse {
    because: BecauseObject,
    articles: Vec<ArticleObject>,
}

#[derive(Deserialize)]
struct BecauseObject {
    #[serde(rename = "_id")]
    id: String,
    title: String,
}

#[derive(Deserialize)]
struct ArticleObject {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    body: String,
    #[serde(rename = "imgUri", default)]
    img_uri: Option<String>,
}

impl From<BecauseObject> for BecauseReason {
    fn from(because: BecauseObject) -> Self {
        Self {
            article_id: because.id,
            title: because.title,
        }
    }
}

impl From<ArticleObject> for ArticleSummary {
    fn from(article: ArticleObject) -> Self {
        Self {
            id: article.id,
            title: article.title,
            body: article.body,
            image_url: article.img_uri,
        }
    }
}

/// Decodes a recommendations response body.
///
/// The whole batch is rejected if the body is not JSON, if `because` or
/// `articles` is missing, or if any single entry lacks a required field.
/// Unknown fields are ignored and article order is kept as sent.
pub fn parse(body: &str) -> Result<RecommendationResult> {
    let response: RecommendationResponse = serde_json::from_str(body)?;
    Ok(RecommendationResult {
        because: response.because.into(),
        articles: response.articles.into_iter().map(Into::into).collect(),
    })
}
