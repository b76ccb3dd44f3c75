//! CLI command implementations

pub mod config;
pub mod form;
pub mod lookup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use ghlookup_core::LookupContext;

/// Environment variable pointing at the ghlookup directory
pub const DIR_ENV: &str = "GHLOOKUP_DIR";

/// Get the ghlookup directory from environment or default
pub fn get_ghlookup_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".ghlookup"))
        .context("Could not find home directory; set GHLOOKUP_DIR")
}

/// Build the lookup context from the user's settings
pub fn get_context() -> Result<LookupContext> {
    let dir = get_ghlookup_dir()?;
    tracing::debug!(dir = %dir.display(), "loading settings");
    LookupContext::new(&dir).context("Failed to initialize lookup context")
}
