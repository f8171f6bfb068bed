use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::errors::FetchError;

// Clones share the same cancellation signal.
#[derive(Debug, Clone)]
pub struct FetchContext {
    token: CancellationToken,
    deadline: Instant,
}

impl FetchContext {
    pub fn with_timeout(timeout: Duration) -> Self {
        FetchContext {
            token: CancellationToken::new(),
            deadline: Instant::now() + timeout,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Resolves once the context is cancelled or its deadline passes.
    /// Cancellation wins when both hold.
    pub async fn done(&self) -> FetchError {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => FetchError::Cancelled,
            _ = tokio::time::sleep_until(self.deadline) => FetchError::DeadlineExceeded,
        }
    }

    pub(crate) fn token(&self) -> &CancellationToken {
        &self.token
    }
}
