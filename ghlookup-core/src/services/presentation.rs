//! Presentation model
//!
//! `render` is a pure function of the two form fields and the current
//! outcome. The result block is chosen by the tag carried on the result, so
//! moving the selector after a fetch cannot reshape what is shown.

use serde::Serialize;

use crate::domain::{LookupKind, LookupOutcome, LookupResult};

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    ShowingSuccess,
    ShowingFailure,
}

impl Phase {
    pub fn of(outcome: Option<&LookupOutcome>) -> Self {
        match outcome {
            None => Phase::Idle,
            Some(LookupOutcome::Pending) => Phase::Loading,
            Some(LookupOutcome::Success(_)) => Phase::ShowingSuccess,
            Some(LookupOutcome::Failure(_)) => Phase::ShowingFailure,
        }
    }
}

/// One labelled line of a result block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBlock {
    pub kind: LookupKind,
    pub heading: &'static str,
    pub rows: Vec<Row>,
}

impl ResultBlock {
    pub fn from_result(result: &LookupResult) -> Self {
        match result {
            LookupResult::User(user) => Self {
                kind: LookupKind::User,
                heading: "User Info",
                rows: vec![
                    Row {
                        label: "Full Name",
                        value: user.full_name.to_string(),
                    },
                    Row {
                        label: "Number of Public Repos",
                        value: user.public_repo_count.to_string(),
                    },
                ],
            },
            LookupResult::Repo(repo) => Self {
                kind: LookupKind::Repo,
                heading: "Repo Info",
                rows: vec![
                    Row {
                        label: "Repo Name",
                        value: repo.name.to_string(),
                    },
                    Row {
                        label: "Number of Stars",
                        value: repo.star_count.to_string(),
                    },
                ],
            },
        }
    }
}

/// Everything a front end needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub identifier: String,
    pub kind: LookupKind,
    pub phase: Phase,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultBlock>,
}

pub fn render(identifier: &str, kind: LookupKind, outcome: Option<&LookupOutcome>) -> Panel {
    let phase = Phase::of(outcome);
    Panel {
        identifier: identifier.to_string(),
        kind,
        phase,
        loading: phase == Phase::Loading,
        error: outcome
            .and_then(LookupOutcome::failure)
            .map(|failure| failure.message.clone()),
        result: outcome
            .and_then(LookupOutcome::result)
            .map(ResultBlock::from_result),
    }
}
