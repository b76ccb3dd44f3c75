//! ghlookup CLI - look up GitHub users and repositories from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghlookup_core::LookupKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

use commands::{config, form, lookup};

/// Environment variable holding the log filter (falls back to RUST_LOG)
const LOG_ENV: &str = "GHLOOKUP_LOG";

/// ghl - GitHub user and repository lookup
#[derive(Parser)]
#[command(name = "ghl", version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive lookup form (default)
    Form {
        /// Preselect the type (user, repo)
        #[arg(long)]
        kind: Option<LookupKind>,
    },

    /// Look up a single user or repository
    Lookup {
        /// GitHub login, or owner/name for repositories (read from stdin if piped)
        identifier: Option<String>,
        /// Lookup type (user, repo)
        #[arg(long, short)]
        kind: Option<LookupKind>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            output::error(&format!("Failed to start runtime: {}", e));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command.unwrap_or(Commands::Form { kind: None }) {
        Commands::Form { kind } => form::run(kind).await,
        Commands::Lookup { identifier, kind, json } => lookup::run(identifier, kind, json).await,
        Commands::Config { command, json } => config::run(command, json),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "ghl=debug,ghlookup_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // Logging must never stop the form from opening
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
