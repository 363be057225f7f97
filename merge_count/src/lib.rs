//! Merged pull request report
//!
//! # Overview
//!
//! Given a location, the library finds the GitHub users with the most repositories there,
//! walks each user's repositories and counts the pull request events that were closed with
//! the merge flag set. The results are folded into one summary per user (repository count
//! and total merged pull count), most repositories first.
//!
//! The GitHub API quota is shared with every other instance of the program, so the client
//! re-checks the remaining quota periodically instead of accounting for it locally. When
//! the quota runs out mid-scan the report is built from whatever was gathered so far
//! rather than failing the whole query; remote errors abort it.

pub mod report;

use clients::api::Client;
use clients::api::Error;
use clients::api::RepoRef;
use clients::api::Result;
use log::warn;

pub use report::UserSummary;

/// Upper bound on users scanned per query, whatever the caller asks for.
pub const MAX_USERS: u32 = 20;

pub struct ReportGenerator<CLIENT: Client> {
    client: CLIENT,
}

impl<CLIENT: Client> ReportGenerator<CLIENT> {
    pub fn new(client: CLIENT) -> Self {
        ReportGenerator { client }
    }

    /// Runs one location query end to end.
    ///
    /// Quota exhaustion degrades the report to the pairs gathered before the
    /// cutoff. Remote and transport errors abort the query instead, since they
    /// point at a malformed request rather than a spent budget.
    pub async fn generate(&self, location: &str, user_count: u32) -> Result<Vec<UserSummary>> {
        let user_count = user_count.min(MAX_USERS);
        if !self.client.quota_ok().await? {
            warn!("Quota already below the approach threshold, not starting the scan");
            return Ok(Vec::new());
        }
        let users = match self.client.users_at_location(location, user_count).await {
            Err(Error::QuotaExhausted) => return Ok(Vec::new()),
            users => users?,
        };
        let mut counts: Vec<(RepoRef, u32)> = Vec::new();
        'scan: for user in users {
            let repos = match self.client.user_repos(&user).await {
                Ok(repos) => repos,
                Err(Error::QuotaExhausted) => {
                    warn!("Quota exhausted, reporting the {} repositories scanned so far", counts.len());
                    break 'scan;
                }
                Err(err) => return Err(err),
            };
            for repo in repos {
                match self.client.merged_pull_count(&repo).await {
                    Ok(merged) => counts.push((repo, merged)),
                    Err(Error::QuotaExhausted) => {
                        warn!("Quota exhausted, reporting the {} repositories scanned so far", counts.len());
                        break 'scan;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(report::build(counts))
    }
}
