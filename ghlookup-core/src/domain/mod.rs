//! Core domain entities
//!
//! Pure data structures for a lookup: what was asked (Query), what came
//! back (LookupResult) and how the attempt ended (LookupOutcome). No I/O here.

mod outcome;
mod query;
pub mod result;
mod summary;

pub use outcome::{Failure, FailureReason, LookupOutcome, RequestToken};
pub use query::{LookupKind, Query};
pub use summary::{Field, LookupResult, RepoSummary, UserSummary};
