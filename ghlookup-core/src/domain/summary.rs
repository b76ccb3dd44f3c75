//! Normalized result shapes

use std::fmt;

use serde::Serialize;

use super::query::LookupKind;

/// A value taken from the API payload without trusting its presence or type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum Field<T> {
    Known(T),
    /// Absent from the payload, or JSON null
    Missing,
    /// Present but not of the expected type
    Malformed,
}

impl<T> Field<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Field::Known(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Field::Known(_))
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Known(value) => value.fmt(f),
            Field::Missing => f.write_str("unknown"),
            Field::Malformed => f.write_str("invalid"),
        }
    }
}

/// Summary of `GET /users/{login}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub full_name: Field<String>,
    pub public_repo_count: Field<u64>,
}

/// Summary of `GET /repos/{owner}/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub name: Field<String>,
    pub star_count: Field<u64>,
}

/// Normalized payload, tagged with the kind it was fetched under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LookupResult {
    User(UserSummary),
    Repo(RepoSummary),
}

impl LookupResult {
    pub fn kind(&self) -> LookupKind {
        match self {
            LookupResult::User(_) => LookupKind::User,
            LookupResult::Repo(_) => LookupKind::Repo,
        }
    }
}
