//! Form command - the interactive lookup form

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use ghlookup_core::LookupKind;

use super::get_context;
use crate::output;

pub async fn run(kind: Option<LookupKind>) -> Result<ExitCode> {
    let ctx = get_context()?;
    let form = ctx.form();
    if let Some(kind) = kind {
        form.set_kind(kind).await;
    }

    println!("{}", "GitHub Lookup".bold());
    println!();

    loop {
        let (identifier, kind) = form
            .state(|s| (s.identifier().to_string(), s.kind()))
            .await;

        let identifier: String = Input::new()
            .with_prompt("Username / Repository")
            .with_initial_text(identifier)
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("This field is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        form.set_identifier(identifier).await;

        let labels: Vec<&str> = LookupKind::ALL.iter().map(|k| k.label()).collect();
        let current = LookupKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(0);
        let selection = Select::new()
            .with_prompt("Type")
            .items(&labels)
            .default(current)
            .interact()?;
        form.set_kind(LookupKind::ALL[selection]).await;

        let spinner = output::spinner("Fetching...");
        let submitted = form.submit().await;
        spinner.finish_and_clear();

        match submitted {
            Ok(_) => output::print_panel(&form.panel().await),
            Err(e) => output::error(&e.to_string()),
        }
        println!();

        let again = Confirm::new()
            .with_prompt("Look up another?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
