//! ghlookup core - GitHub user/repository lookup form logic
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: Query, result shapes and outcomes
//! - **ports**: the `GitHubApi` trait, the only network seam
//! - **services**: dispatcher, normalizer, session state machine, presentation
//! - **adapters**: reqwest client for the real API (and a test mock server)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::github::GitHubClient;
use config::Config;
use ports::GitHubApi;
use services::{LookupForm, LookupService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    Failure, FailureReason, Field, LookupKind, LookupOutcome, LookupResult, Query, RepoSummary,
    RequestToken, UserSummary,
};
pub use services::{LookupEvent, Panel, Phase, Settled};

/// Main context for lookups
///
/// Holds the configuration and the dispatcher wired to the real GitHub API.
pub struct LookupContext {
    pub config: Config,
    pub lookup_service: LookupService,
}

impl LookupContext {
    /// Create a context from the settings in `dir`
    pub fn new(dir: &Path) -> Result<Self> {
        let config = Config::load(dir)?;
        let client = GitHubClient::from_config(&config).context("Failed to create GitHub client")?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a context over any `GitHubApi` implementation
    pub fn with_api(config: Config, api: Arc<dyn GitHubApi>) -> Self {
        Self {
            config,
            lookup_service: LookupService::new(api),
        }
    }

    /// A fresh form session using the configured default kind
    pub fn form(&self) -> LookupForm {
        LookupForm::new(self.lookup_service.clone(), self.config.default_kind)
    }
}
