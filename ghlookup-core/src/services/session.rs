//! Form session: input fields plus request lifecycle
//!
//! `LookupSession` is the synchronous state machine. `LookupForm` drives it
//! through the dispatcher and only lets the most recently issued request
//! settle the outcome.

use tokio::sync::Mutex;

use crate::domain::result::Result;
use crate::domain::{LookupKind, LookupOutcome, Query, RequestToken};

use super::logging::LookupEvent;
use super::lookup::LookupService;
use super::presentation::{render, Panel, Phase};

/// A submission accepted by the session, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub token: RequestToken,
    pub query: Query,
}

/// What happened to a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// The outcome is now the visible one
    Applied(LookupOutcome),
    /// A newer submission was issued; the outcome was dropped
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct LookupSession {
    identifier: String,
    kind: LookupKind,
    outcome: Option<LookupOutcome>,
    latest: Option<RequestToken>,
}

impl LookupSession {
    pub fn new(default_kind: LookupKind) -> Self {
        Self {
            kind: default_kind,
            ..Self::default()
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> LookupKind {
        self.kind
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    /// Changing the selector never touches a shown result
    pub fn set_kind(&mut self, kind: LookupKind) {
        self.kind = kind;
    }

    pub fn outcome(&self) -> Option<&LookupOutcome> {
        self.outcome.as_ref()
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self.outcome.as_ref())
    }

    /// Freeze the fields into a query and move to Loading.
    ///
    /// Fails without touching state when the identifier is blank.
    pub fn begin_submit(&mut self) -> Result<Submission> {
        let query = Query::new(self.identifier.clone(), self.kind)?;
        let token = self.latest.map_or(RequestToken(1), RequestToken::next);

        self.latest = Some(token);
        self.outcome = Some(LookupOutcome::Pending);

        Ok(Submission { token, query })
    }

    /// Apply a finished request if it is the latest one still pending
    pub fn settle(&mut self, token: RequestToken, outcome: LookupOutcome) -> Settled {
        let pending = matches!(self.outcome, Some(LookupOutcome::Pending));
        if self.latest != Some(token) || !pending || outcome.is_pending() {
            return Settled::Stale;
        }
        self.outcome = Some(outcome.clone());
        Settled::Applied(outcome)
    }

    pub fn render(&self) -> Panel {
        render(&self.identifier, self.kind, self.outcome.as_ref())
    }
}

/// The lookup form controller
///
/// Safe to share between tasks; the session lock is never held across the
/// network call.
pub struct LookupForm {
    service: LookupService,
    session: Mutex<LookupSession>,
}

impl LookupForm {
    pub fn new(service: LookupService, default_kind: LookupKind) -> Self {
        Self {
            service,
            session: Mutex::new(LookupSession::new(default_kind)),
        }
    }

    pub async fn set_identifier(&self, identifier: impl Into<String>) {
        self.session.lock().await.set_identifier(identifier);
    }

    pub async fn set_kind(&self, kind: LookupKind) {
        self.session.lock().await.set_kind(kind);
    }

    /// Read from the session under its lock
    pub async fn state<R>(&self, f: impl FnOnce(&LookupSession) -> R) -> R {
        let session = self.session.lock().await;
        f(&session)
    }

    pub async fn panel(&self) -> Panel {
        self.session.lock().await.render()
    }

    /// Submit the current field values.
    ///
    /// # Errors
    /// Returns `Error::Validation` when the identifier is blank; nothing is
    /// dispatched in that case.
    pub async fn submit(&self) -> Result<Settled> {
        let submission = self.session.lock().await.begin_submit()?;
        let Submission { token, query } = submission;

        LookupEvent::new("lookup_started")
            .with_kind(query.kind())
            .with_token(token)
            .emit();

        let outcome = self.service.submit(&query).await;
        let settled = self.session.lock().await.settle(token, outcome);

        match &settled {
            Settled::Applied(outcome) => LookupEvent::new("lookup_applied")
                .with_kind(query.kind())
                .with_token(token)
                .with_outcome(outcome)
                .emit(),
            Settled::Stale => LookupEvent::new("lookup_stale")
                .with_kind(query.kind())
                .with_token(token)
                .emit(),
        }

        Ok(settled)
    }
}
