// Shared fixtures for the mock-server tests
#![allow(dead_code)]

use std::sync::Arc;

use papel_core::{AuthTokenProvider, ClientConfig, StaticTokenProvider};
use papel_recommendations::{Navigator, RecommendationClient};
use wiremock::MockServer;

pub const ARTICLES_PATH: &str = "/recommendation/articles";

pub const THREE_ARTICLES: &str = r#"{
    "because": {"_id": "b1", "title": "Why cities flood"},
    "articles": [
        {"_id": "a1", "title": "Rivers", "body": "..."},
        {"_id": "a2", "title": "Drains", "body": "...", "imgUri": "http://img/a2.png"},
        {"_id": "a3", "title": "Levees", "body": "..."}
    ]
}"#;

pub const ONE_ARTICLE: &str =
    r#"{"because":{"_id":"b2","title":"T"},"articles":[{"_id":"z1","title":"Z","body":"B"}]}"#;

pub fn client_for(server: &MockServer, token: &str) -> RecommendationClient {
    let tokens: Arc<dyn AuthTokenProvider> = Arc::new(StaticTokenProvider::new(token));
    let config = ClientConfig::new(server.uri(), "/recommendation/");
    RecommendationClient::new(&config, tokens).unwrap()
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub opened: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn open_article(&mut self, article_id: &str) {
        self.opened.push(article_id.to_string());
    }
}
