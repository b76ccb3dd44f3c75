//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the GitHubApi port
//! - a local mock GitHub server for tests

pub mod github;

#[cfg(test)]
pub mod github_mock;
