use url::Url;

use crate::{Error, Result};

pub const DEFAULT_HOST: &str = "http://localhost:3000";
pub const DEFAULT_RECOMMENDATION_PATH: &str = "/recommendation/";

/// Where the recommendations endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub recommendation_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            recommendation_path: DEFAULT_RECOMMENDATION_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, recommendation_path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            recommendation_path: recommendation_path.into(),
        }
    }

    /// `host + recommendation_path + "articles"`, concatenated verbatim.
    pub fn articles_url(&self) -> Result<Url> {
        let raw = format!("{}{}articles", self.host, self.recommendation_path);
        Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let url = ClientConfig::default().articles_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/recommendation/articles");
    }

    #[test]
    fn test_concatenation_is_literal() {
        let config = ClientConfig::new("https://api.example.com/v2/", "recs/");
        assert_eq!(
            config.articles_url().unwrap().as_str(),
            "https://api.example.com/v2/recs/articles"
        );
    }

    #[test]
    fn test_invalid_host() {
        let config = ClientConfig::new("not a host", "/recommendation/");
        assert!(matches!(config.articles_url(), Err(Error::InvalidUrl(_))));
    }
}
