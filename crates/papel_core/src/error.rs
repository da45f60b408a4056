use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Index {index} out of range for {len} recommendations")]
    Index { index: usize, len: usize },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Network failure or non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Malformed or incomplete response body.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
