use crate::cli::Cli;
use crate::error::ContextError;
use serde::Deserialize;
use std::path::Path;

/// Everything one run needs, read once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub python_version: String,
    pub black_version: String,
    pub black_args: String,
    pub github_token: String,
    pub paths: String,
    pub fail_on_error: bool,
    pub event: EventContext,
}

/// Repository and event facts taken from the Actions runtime environment.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub owner: String,
    pub repo: String,
    /// Present only when the triggering event carries a pull request.
    pub pull_request: Option<u64>,
}

#[derive(Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestRef>,
}

#[derive(Deserialize)]
struct PullRequestRef {
    number: u64,
}

impl RunContext {
    pub fn from_cli(cli: Cli) -> Result<Self, ContextError> {
        let event = EventContext::from_env()?;
        Ok(Self {
            python_version: cli.python_version,
            black_version: cli.black_version,
            black_args: cli.black_args,
            github_token: cli.github_token,
            paths: cli.paths,
            fail_on_error: parse_flag(&cli.fail_on_error),
            event,
        })
    }
}

impl EventContext {
    pub fn from_env() -> Result<Self, ContextError> {
        let repository =
            std::env::var("GITHUB_REPOSITORY").map_err(|_| ContextError::MissingRepository)?;
        let (owner, repo) = split_repository(&repository)?;

        let event_path =
            std::env::var("GITHUB_EVENT_PATH").map_err(|_| ContextError::MissingEventPath)?;
        let pull_request = read_pull_request(Path::new(&event_path))?;

        Ok(Self {
            owner,
            repo,
            pull_request,
        })
    }
}

/// Only the literal "true" (any case) enables the flag, everything else
/// disables it.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn split_repository(repository: &str) -> Result<(String, String), ContextError> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ContextError::MalformedRepository(repository.to_string())),
    }
}

fn read_pull_request(path: &Path) -> Result<Option<u64>, ContextError> {
    let content = std::fs::read_to_string(path).map_err(|e| ContextError::ReadPayload {
        path: path.to_path_buf(),
        source: e,
    })?;

    let payload: EventPayload = serde_json::from_str(&content)?;
    Ok(payload.pull_request.map(|pr| pr.number))
}
