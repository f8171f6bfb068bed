use std::time::Duration;
use clap::Parser;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

pub mod context;
pub mod errors;
pub mod models;
pub mod services;
pub mod validators;

use context::FetchContext;
use errors::FetchError;
use models::profile_summary::ProfileSummary;
use services::github_user_service::{GitHubUserService, DEFAULT_BASE_URL};


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="github-info", about="Prints a GitHub user's name and public repository count")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "info")]
    log_level: String,

    #[clap(long = "login", default_value = "tebeka", value_parser = validators::parse_login)]
    login: String,

    #[clap(long = "timeout-ms", default_value = "3")]
    timeout_ms: u64,

    #[clap(long = "base-url", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[clap(long = "user-agent")]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,reqwest=info", opt.log_level));
    }
    // Logs go to stderr, stdout carries the result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // One client, reused for every lookup
    let mut github_user_service = GitHubUserService::new(Client::new())
        .with_base_url(opt.base_url);
    if let Some(user_agent) = opt.user_agent {
        github_user_service = github_user_service.with_user_agent(user_agent);
    }

    let ctx = FetchContext::with_timeout(Duration::from_millis(opt.timeout_ms));
    let ctrl_c_ctx = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_ctx.cancel();
        }
    });
    log::info!("Fetching {} with a {}ms timeout", opt.login, opt.timeout_ms);

    let result = github_user_service.get_profile(&ctx, &opt.login).await;
    if let Err(err) = &result {
        log::warn!("{}", describe_failure(&opt.login, opt.timeout_ms, err));
    }

    println!("{:?}", to_tuple(result));
}

// Zero values alongside the error, the way the result is reported.
fn to_tuple(result: Result<ProfileSummary, FetchError>) -> (String, u64, Option<String>) {
    match result {
        Ok(summary) => (summary.name, summary.public_repo_count, None),
        Err(err) => (String::new(), 0, Some(err.to_string())),
    }
}

fn describe_failure(login: &str, timeout_ms: u64, err: &FetchError) -> String {
    if err.is_timeout() {
        return format!("Lookup of {} timed out after {}ms", login, timeout_ms);
    }
    match err.status() {
        Some(status) => format!("GitHub answered {} for {}", status, login),
        None => format!("Lookup of {} failed: {}", login, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::parse_from(["github-info"]);
        assert_eq!(opt.log_level, "info");
        assert_eq!(opt.login, "tebeka");
        assert_eq!(opt.timeout_ms, 3);
        assert_eq!(opt.base_url, DEFAULT_BASE_URL);
        assert!(opt.user_agent.is_none());
    }

    #[test]
    fn test_opt_rejects_empty_login() {
        assert!(Opt::try_parse_from(["github-info", "--login", ""]).is_err());
    }

    #[test]
    fn test_opt_overrides() {
        let opt = Opt::parse_from([
            "github-info",
            "--login",
            "jane",
            "--timeout-ms",
            "2000",
            "--user-agent",
            "github-info",
        ]);
        assert_eq!(opt.login, "jane");
        assert_eq!(opt.timeout_ms, 2000);
        assert_eq!(opt.user_agent.as_deref(), Some("github-info"));
    }

    #[test]
    fn test_to_tuple() {
        let ok = to_tuple(Ok(ProfileSummary {
            name: "Jane".to_string(),
            public_repo_count: 42,
        }));
        assert_eq!(ok, ("Jane".to_string(), 42, None));

        let err = to_tuple(Err(FetchError::DeadlineExceeded));
        assert_eq!(
            err,
            (String::new(), 0, Some("context deadline exceeded".to_string()))
        );
    }

    #[test]
    fn test_describe_failure() {
        assert_eq!(
            describe_failure("tebeka", 3, &FetchError::DeadlineExceeded),
            "Lookup of tebeka timed out after 3ms"
        );

        let not_found = FetchError::UnexpectedStatus {
            url: "https://api.github.com/users/nobody".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            describe_failure("nobody", 3, &not_found),
            "GitHub answered 404 Not Found for nobody"
        );

        assert_eq!(
            describe_failure("tebeka", 3, &FetchError::Cancelled),
            "Lookup of tebeka failed: context cancelled"
        );
    }
}
