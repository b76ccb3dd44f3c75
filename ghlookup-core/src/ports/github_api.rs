//! GitHub API port
//!
//! The single seam for network IO. One call to `get_json` is one outbound
//! GET request.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::result::Result;

/// Read-only access to the GitHub REST API
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Base URL requests are built against (no trailing slash)
    fn base_url(&self) -> &str;

    /// Issue one GET and decode the body as JSON.
    ///
    /// # Errors
    /// * `Error::Http` when the response status is not 2xx
    /// * `Error::Transport` when the request or decoding fails
    async fn get_json(&self, url: &str) -> Result<JsonValue>;
}
