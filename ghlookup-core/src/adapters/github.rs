//! GitHub REST API client
//!
//! Anonymous, read-only access to `api.github.com`. No retries and no
//! timeout beyond the HTTP client's defaults.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::ports::GitHubApi;

/// Default production API URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("ghlookup/", env!("CARGO_PKG_VERSION"));

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the public GitHub API.
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::new_with_base_url(GITHUB_API_URL, user_agent)
    }

    /// Create a client against a custom base URL (mock servers, GitHub Enterprise).
    pub fn new_with_base_url(base_url: &str, user_agent: &str) -> Result<Self> {
        if user_agent.trim().is_empty() {
            return Err(Error::config("User-Agent cannot be empty"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|_| Error::config(format!("Invalid User-Agent: {}", user_agent)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new_with_base_url(&config.api_base_url, &config.user_agent)
    }

    /// Map request errors to transport errors with a readable cause
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::transport("Connection to GitHub timed out")
        } else if error.is_connect() {
            Error::transport(format!("Unable to connect to {}", self.base_url))
        } else if error.is_decode() {
            Error::transport(format!("Failed to parse GitHub response: {}", error))
        } else {
            Error::transport(format!("GitHub request failed: {}", error))
        }
    }

    /// Any non-2xx status is an HTTP error; the body is not read
    fn check_response_status(&self, response: &Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Http {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, url: &str) -> Result<JsonValue> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| self.map_request_error(e))
    }
}
