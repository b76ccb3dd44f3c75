//! Outcome of one dispatch attempt

use serde::Serialize;

use super::summary::LookupResult;

/// Shown for any non-success HTTP status
pub const HTTP_FAILURE_MESSAGE: &str = "Error fetching data";

/// Shown for connection, read and decode failures
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to fetch data. Please check the input and try again.";

/// Sequence number of a submission within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(pub u64);

impl RequestToken {
    pub fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    HttpStatus,
    Transport,
}

/// A failed lookup. The status code and underlying error are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub reason: FailureReason,
    pub message: String,
}

impl Failure {
    pub fn http_status() -> Self {
        Self {
            reason: FailureReason::HttpStatus,
            message: HTTP_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn transport() -> Self {
        Self {
            reason: FailureReason::Transport,
            message: TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LookupOutcome {
    Pending,
    Success(LookupResult),
    Failure(Failure),
}

impl LookupOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, LookupOutcome::Pending)
    }

    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            LookupOutcome::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            LookupOutcome::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}
