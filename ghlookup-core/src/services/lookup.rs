//! Request dispatcher
//!
//! Turns one Query into exactly one GET and folds every possible result,
//! including errors, into a LookupOutcome.

use std::sync::Arc;

use crate::domain::result::Error;
use crate::domain::{Failure, LookupKind, LookupOutcome, Query};
use crate::ports::GitHubApi;

use super::logging::LookupEvent;
use super::normalize::normalize;

/// Build the request target for a query. The identifier is substituted verbatim.
pub fn endpoint_url(base_url: &str, query: &Query) -> String {
    let collection = match query.kind() {
        LookupKind::User => "users",
        LookupKind::Repo => "repos",
    };
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        collection,
        query.identifier()
    )
}

/// Service dispatching lookups through the GitHub API port
#[derive(Clone)]
pub struct LookupService {
    api: Arc<dyn GitHubApi>,
}

impl LookupService {
    pub fn new(api: Arc<dyn GitHubApi>) -> Self {
        Self { api }
    }

    /// Request target for `query` against the configured API
    pub fn endpoint_url(&self, query: &Query) -> String {
        endpoint_url(self.api.base_url(), query)
    }

    /// Submit one query. Never fails: errors become `LookupOutcome::Failure`.
    pub async fn submit(&self, query: &Query) -> LookupOutcome {
        let url = self.endpoint_url(query);
        tracing::debug!(identifier = query.identifier(), %url, "dispatching lookup");

        match self.api.get_json(&url).await {
            Ok(body) => LookupOutcome::Success(normalize(query.kind(), &body)),
            Err(Error::Http { status }) => {
                let outcome = LookupOutcome::Failure(Failure::http_status());
                LookupEvent::new("lookup_failed")
                    .with_kind(query.kind())
                    .with_outcome(&outcome)
                    .with_http_status(status)
                    .emit();
                outcome
            }
            Err(e) => {
                let outcome = LookupOutcome::Failure(Failure::transport());
                LookupEvent::new("lookup_failed")
                    .with_kind(query.kind())
                    .with_outcome(&outcome)
                    .with_error_details(e.to_string())
                    .emit();
                outcome
            }
        }
    }
}
