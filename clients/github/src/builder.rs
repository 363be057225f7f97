use crate::quota::QuotaTracker;
use crate::GithubClient;
use clients::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use std::time::Duration;

const GITHUB_API_URL: &str = "https://api.github.com";
/// Stop issuing calls once this few are left in the shared quota.
const DEFAULT_APPROACH_LIMIT: u32 = 2000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    api_url: String,
    approach_limit: u32,
    headers: HeaderMap,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("merge-count-app"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        Self {
            client_builder: ClientBuilder::default(),
            api_url: GITHUB_API_URL.to_string(),
            approach_limit: DEFAULT_APPROACH_LIMIT,
            headers,
        }
    }
}

impl GithubClientBuilder {
    pub fn try_with_token(self, token: secrecy::SecretString) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::AUTHORIZATION, token.expose_secret())?)
    }

    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_api_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.api_url = url.as_ref().to_string();
        self
    }

    pub fn with_approach_limit(mut self, approach_limit: u32) -> GithubClientBuilder {
        self.approach_limit = approach_limit;
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<GithubClient> {
        let http = self
            .client_builder
            .timeout(REQUEST_TIMEOUT)
            .default_headers(self.headers)
            .build()?;
        let quota = QuotaTracker::new(http.clone(), self.api_url.clone(), self.approach_limit);
        Ok(GithubClient {
            http,
            api_url: self.api_url,
            quota,
        })
    }
}
