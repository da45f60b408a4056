pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::{AuthTokenProvider, SessionTokenProvider, StaticTokenProvider};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::{ArticleSummary, BecauseReason, RecommendationResult};
