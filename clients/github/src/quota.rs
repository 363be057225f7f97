use clients::api::Result;
use log::debug;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::payload::RateLimit;

/// Probe the quota on every Nth admitted call.
pub(crate) const CHECK_INTERVAL: u64 = 10;

/// Tracks the externally shared call quota.
///
/// The quota is never decremented locally. It is re-probed from the service,
/// because other instances of the program may be spending the same budget.
pub(crate) struct QuotaTracker {
    http: Client,
    api_url: String,
    approach_limit: u32,
    calls: Mutex<u64>,
}

impl QuotaTracker {
    pub(crate) fn new(http: Client, api_url: String, approach_limit: u32) -> Self {
        QuotaTracker {
            http,
            api_url,
            approach_limit,
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn approach_limit(&self) -> u32 {
        self.approach_limit
    }

    /// Calls left in the shared quota. `GET /rate_limit` itself does not consume it.
    pub(crate) async fn remaining(&self) -> Result<u32> {
        let request_url = format!("{}/rate_limit", self.api_url);
        let response = self.http.get(request_url).send().await?;
        let limit = crate::read_response::<RateLimit>(response).await?;
        Ok(limit.rate.remaining)
    }

    /// Admission check for one budgeted call. Every `CHECK_INTERVAL`th
    /// admitted call re-probes the remaining quota; between probes calls pass
    /// unchecked. A denied call does not advance the counter, so the next
    /// attempt probes again.
    pub(crate) async fn should_admit(&self) -> Result<bool> {
        // Counter lock is held across the probe so parallel callers cannot
        // slip past the approach limit between check and admission.
        let mut calls = self.calls.lock().await;
        if *calls % CHECK_INTERVAL == 0 {
            let remaining = self.remaining().await?;
            debug!("Quota probe: {} calls remaining", remaining);
            if remaining < self.approach_limit {
                return Ok(false);
            }
        }
        *calls += 1;
        Ok(true)
    }
}
