//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The lookup services
//! depend only on these traits, not on a concrete HTTP client.

mod github_api;

pub use github_api::GitHubApi;
