use std::fmt::Display;

use async_trait::async_trait;
use derive_more::Constructor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The shared call quota is nearly spent; stop issuing calls.
    #[error("API quota exhausted")]
    QuotaExhausted,
    /// The service rejected the request (status >= 400).
    #[error("Remote error: {0}")]
    Remote(String),
    #[error("Error: {0}")]
    Error(&'static str),
    // the only reason of `reqwest` dependency..
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Account login at the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(login: impl Into<String>) -> Self {
        UserId(login.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// (owner, repository) pair. The join key of the whole pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct RepoRef {
    pub owner: UserId,
    pub name: String,
}

#[async_trait]
pub trait Client: Send + Sync {
    /// Users at `location` with the most repositories first, at most `limit` of them.
    async fn users_at_location(&self, location: &str, limit: u32) -> Result<Vec<UserId>>;

    /// One page of repositories owned by `user`, in response order.
    async fn user_repos(&self, user: &UserId) -> Result<Vec<RepoRef>>;

    /// Number of closed-and-merged pull request events in the repository's recent event stream.
    async fn merged_pull_count(&self, repo: &RepoRef) -> Result<u32>;

    /// Calls left in the shared quota. The probe itself is free.
    async fn remaining_calls(&self) -> Result<u32>;

    /// Whether the remaining quota is still above the approach threshold.
    async fn quota_ok(&self) -> Result<bool>;
}
