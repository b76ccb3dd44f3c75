//! Lookup query: the two form fields frozen at submit time

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Which GitHub entity an identifier names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    #[default]
    User,
    Repo,
}

impl LookupKind {
    /// All selector options, in display order
    pub const ALL: [LookupKind; 2] = [LookupKind::User, LookupKind::Repo];

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::User => "user",
            LookupKind::Repo => "repo",
        }
    }

    /// Human label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            LookupKind::User => "User",
            LookupKind::Repo => "Repo",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(LookupKind::User),
            "repo" => Ok(LookupKind::Repo),
            other => Err(Error::validation(format!(
                "Unknown lookup kind: {}. Available: user, repo",
                other
            ))),
        }
    }
}

/// A single submission: non-empty identifier plus the selected kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    identifier: String,
    kind: LookupKind,
}

impl Query {
    /// Build a query, rejecting blank identifiers.
    ///
    /// The identifier is kept verbatim; only the emptiness check trims.
    pub fn new(identifier: impl Into<String>, kind: LookupKind) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(Error::validation("identifier must not be empty"));
        }
        Ok(Self { identifier, kind })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> LookupKind {
        self.kind
    }
}
