//! GitHub implementation of the `clients::api::Client` contract, with every
//! data call routed through a quota admission check.

mod builder;
mod payload;
mod quota;

use async_trait::async_trait;
use clients::api::Error;
use clients::api::RepoRef;
use clients::api::Result;
use clients::api::UserId;
use log::debug;
use reqwest::Client;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::payload::Event;
use crate::payload::GithubError;
use crate::payload::Repo;
use crate::payload::SearchUsers;
use crate::quota::QuotaTracker;

pub use builder::GithubClientBuilder;

/// Single page bound for the repository listing.
const REPOS_PER_PAGE: u32 = 100;

pub struct GithubClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    pub(crate) quota: QuotaTracker,
}

impl GithubClient {
    /// One quota-budgeted API call. Denied calls never reach the network.
    async fn fetch<T: DeserializeOwned>(&self, request_url: String, query: &[(&str, String)]) -> Result<T> {
        if !self.quota.should_admit().await? {
            return Err(Error::QuotaExhausted);
        }
        let response = self.http.get(request_url).query(query).send().await?;
        read_response(response).await
    }
}

#[async_trait]
impl clients::api::Client for GithubClient {
    async fn users_at_location(&self, location: &str, limit: u32) -> Result<Vec<UserId>> {
        let request_url = format!("{}/search/users", self.api_url);
        let location_query = format!("location:{} type:user sort:repositories", location);
        let users = self
            .fetch::<SearchUsers>(request_url, &[("q", location_query), ("per_page", limit.to_string())])
            .await?;
        Ok(users.items.into_iter().map(|user| UserId::new(user.login)).collect())
    }

    async fn user_repos(&self, user: &UserId) -> Result<Vec<RepoRef>> {
        let request_url = format!("{}/users/{}/repos", self.api_url, user);
        let repos = self
            .fetch::<Vec<Repo>>(request_url, &[("per_page", REPOS_PER_PAGE.to_string())])
            .await?;
        Ok(repos
            .into_iter()
            .map(|repo| RepoRef::new(user.clone(), repo.name))
            .collect())
    }

    async fn merged_pull_count(&self, repo: &RepoRef) -> Result<u32> {
        let request_url = format!("{}/repos/{}/{}/events", self.api_url, repo.owner, repo.name);
        let events = self.fetch::<Vec<Event>>(request_url, &[]).await?;
        let merged = events.iter().filter(|event| event.is_merged_pull()).count();
        debug!("{}/{}: {} merged pull events", repo.owner, repo.name, merged);
        Ok(merged as u32)
    }

    async fn remaining_calls(&self) -> Result<u32> {
        self.quota.remaining().await
    }

    async fn quota_ok(&self) -> Result<bool> {
        Ok(self.quota.remaining().await? >= self.quota.approach_limit())
    }
}

/// Status >= 400 becomes `Error::Remote` carrying the message GitHub sent back.
pub(crate) async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().as_u16() >= 400 {
        let message = response
            .json::<GithubError>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "no error description from server".to_string());
        return Err(Error::Remote(message));
    }
    response
        .json::<T>()
        .await
        .map_err(|_| Error::Remote("decode failure".to_string()))
}
