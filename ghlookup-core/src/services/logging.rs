//! Structured lookup events
//!
//! Events are emitted through `tracing`; the binary decides where they go.
//! Identifiers are user input and never appear in an event, only in
//! `debug!` lines next to the request.

use crate::domain::{FailureReason, LookupKind, LookupOutcome, RequestToken};

/// A lookup lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEvent {
    pub event: &'static str,
    pub kind: Option<LookupKind>,
    pub token: Option<u64>,
    pub reason: Option<FailureReason>,
    pub http_status: Option<u16>,
    pub error_details: Option<String>,
}

impl LookupEvent {
    /// Create a new event with just a name
    pub fn new(event: &'static str) -> Self {
        Self {
            event,
            kind: None,
            token: None,
            reason: None,
            http_status: None,
            error_details: None,
        }
    }

    pub fn with_kind(mut self, kind: LookupKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_token(mut self, token: RequestToken) -> Self {
        self.token = Some(token.0);
        self
    }

    /// Set the failure reason from an outcome (no-op for non-failures)
    pub fn with_outcome(mut self, outcome: &LookupOutcome) -> Self {
        if let LookupOutcome::Failure(failure) = outcome {
            self.reason = Some(failure.reason);
        }
        self
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.reason.is_some()
    }

    /// Emit at `warn` for failures and `info` otherwise
    pub fn emit(&self) {
        let kind = self.kind.map(|k| k.as_str());
        let reason = self.reason.map(reason_str);
        if self.is_error() {
            tracing::warn!(
                event = self.event,
                kind,
                token = self.token,
                reason,
                http_status = self.http_status,
                details = self.error_details.as_deref(),
                "lookup failed"
            );
        } else {
            tracing::info!(event = self.event, kind, token = self.token, "lookup event");
        }
    }
}

fn reason_str(reason: FailureReason) -> &'static str {
    match reason {
        FailureReason::HttpStatus => "http_status",
        FailureReason::Transport => "transport",
    }
}
