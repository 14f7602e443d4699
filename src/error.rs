use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("GITHUB_REPOSITORY is not set")]
    MissingRepository,

    #[error("GITHUB_REPOSITORY '{0}' is not in owner/name form")]
    MalformedRepository(String),

    #[error("GITHUB_EVENT_PATH is not set")]
    MissingEventPath,

    #[error("Failed to read event payload '{path}': {source}")]
    ReadPayload {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse event payload: {0}")]
    ParsePayload(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to build GitHub client: {0}")]
    Client(#[source] octocrab::Error),

    #[error("Failed to list comments on PR #{number}: {source}")]
    ListComments {
        number: u64,
        #[source]
        source: octocrab::Error,
    },

    #[error("Failed to update comment {id}: {source}")]
    UpdateComment {
        id: u64,
        #[source]
        source: octocrab::Error,
    },

    #[error("Failed to create comment on PR #{number}: {source}")]
    CreateComment {
        number: u64,
        #[source]
        source: octocrab::Error,
    },
}
