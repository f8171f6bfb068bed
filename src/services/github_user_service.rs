use std::io;

use futures::{StreamExt, TryStreamExt};
use reqwest::header::USER_AGENT;
use reqwest::{Client, Request, StatusCode};
use tokio_util::io::{StreamReader, SyncIoBridge};
use tokio_util::sync::CancellationToken;

use crate::context::FetchContext;
use crate::errors::FetchError;
use crate::models::profile_summary::ProfileSummary;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/users/";

#[derive(Debug, Clone)]
pub struct GitHubUserService {
    client: Client,
    base_url: String,
    user_agent: Option<String>,
}

impl GitHubUserService {
    pub fn new(client: Client) -> Self {
        GitHubUserService {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        }
    }

    // Should end with `/`, the login is appended as-is.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn url_for(&self, login: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(login))
    }

    /// Issues exactly one request. A context that is already done sends nothing.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn get_profile(
        &self,
        ctx: &FetchContext,
        login: &str,
    ) -> Result<ProfileSummary, FetchError> {
        let url = self.url_for(login);

        let mut builder = self.client.get(&url);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.header(USER_AGENT, user_agent);
        }
        let request = builder.build().map_err(FetchError::Request)?;

        // Ends the body stream on every exit path.
        let abort = ctx.token().child_token();
        let _abort_guard = abort.clone().drop_guard();

        tokio::select! {
            biased;
            err = ctx.done() => Err(err),
            result = self.execute(request, url, abort) => result,
        }
    }

    async fn execute(
        &self,
        request: Request,
        url: String,
        abort: CancellationToken,
    ) -> Result<ProfileSummary, FetchError> {
        log::debug!("Making request to {}...", url);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus { url, status });
        }

        let body = response
            .bytes_stream()
            .map_err(io::Error::other)
            .take_until(abort.cancelled_owned());
        let reader = SyncIoBridge::new(StreamReader::new(Box::pin(body)));

        let summary = tokio::task::spawn_blocking(move || {
            serde_json::from_reader::<_, ProfileSummary>(reader)
        })
        .await??;

        Ok(summary)
    }
}
