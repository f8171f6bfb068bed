use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching a profile.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("context cancelled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("{url:?} - {status}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::DeadlineExceeded => true,
            FetchError::Transport(err) => err.is_timeout(),
            _ => false,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
