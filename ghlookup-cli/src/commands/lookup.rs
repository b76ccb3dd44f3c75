//! Lookup command - one submission without the interactive form

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::Input;
use ghlookup_core::{LookupKind, LookupOutcome, Settled};

use super::get_context;
use crate::output;

pub async fn run(identifier: Option<String>, kind: Option<LookupKind>, json: bool) -> Result<ExitCode> {
    let ctx = get_context()?;

    let identifier = resolve_identifier(
        identifier,
        atty::is(atty::Stream::Stdin),
        io::stdin(),
        || {
            Input::<String>::new()
                .with_prompt("Username / Repository")
                .interact_text()
                .map_err(Into::into)
        },
    )?;

    let form = ctx.form();
    if let Some(kind) = kind {
        form.set_kind(kind).await;
    }
    form.set_identifier(identifier).await;

    let settled = form.submit().await.context("Nothing to look up")?;
    let outcome = match settled {
        Settled::Applied(outcome) => outcome,
        // Only one request is ever issued here
        Settled::Stale => anyhow::bail!("Lookup result was superseded"),
    };

    if json {
        let panel = form.panel().await;
        let report = serde_json::json!({
            "identifier": panel.identifier,
            "kind": panel.kind,
            "outcome": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_panel(&form.panel().await);
    }

    Ok(match outcome {
        LookupOutcome::Success(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Identifier from: argument, piped stdin, or prompt
fn resolve_identifier<R, P>(
    argument: Option<String>,
    stdin_is_terminal: bool,
    mut stdin: R,
    prompt: P,
) -> Result<String>
where
    R: Read,
    P: FnOnce() -> Result<String>,
{
    if let Some(identifier) = argument {
        return Ok(identifier);
    }
    if stdin_is_terminal {
        return prompt();
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read identifier from stdin")?;
    Ok(buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
}
