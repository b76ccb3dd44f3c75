//! Config command - show or change settings

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;
use ghlookup_core::config::{Config, SETTINGS_FILE};
use ghlookup_core::LookupKind;

use super::get_ghlookup_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set the type preselected in the form
    SetKind {
        /// user or repo
        kind: LookupKind,
    },
}

pub fn run(command: Option<ConfigCommands>, json: bool) -> Result<ExitCode> {
    let dir = get_ghlookup_dir()?;
    let mut config = Config::load(&dir)?;

    match command {
        Some(ConfigCommands::SetKind { kind }) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create ghlookup directory: {:?}", dir))?;
            config.default_kind = kind;
            config.save(&dir)?;
            output::success(&format!("Default type set to {}", kind));
        }
        None if json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            output::info(&format!("Settings: {}", dir.join(SETTINGS_FILE).display()));
            let mut table = output::create_table();
            table.add_row(vec!["API base URL", config.api_base_url.as_str()]);
            table.add_row(vec!["User-Agent", config.user_agent.as_str()]);
            table.add_row(vec!["Default type", config.default_kind.as_str()]);
            println!("{}", table);
        }
    }

    Ok(ExitCode::SUCCESS)
}
