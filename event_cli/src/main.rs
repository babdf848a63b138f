//! # Event Wizard CLI
//!
//! Terminal front end for the event creation wizard.
//!
//! - `event_cli` walks through every step with prompts
//! - `event_cli --script actions.json` replays a recorded session
//!
//! Either way the submitted snapshot is printed to stdout as JSON.

mod prompt;
mod script;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use event_core::{EventWizard, JsonSubmitter, WizardConfig, WizardError, WizardResult};

use crate::prompt::Prompter;

#[derive(Debug, Parser)]
#[command(name = "event_cli", version, about = "Create an event from the terminal")]
struct Cli {
    /// TOML file with category, hall and audience options
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file with a list of wizard actions to replay instead of prompting
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> WizardResult<()> {
    let config = WizardConfig::load_or_default(cli.config.as_deref())?;
    let mut wizard = EventWizard::with_config(&config);
    let mut submitter = JsonSubmitter::new(io::stdout());

    match cli.script {
        Some(path) => {
            let actions = script::load_script(&path)?;
            if script::replay(&mut wizard, actions, &mut submitter)?.is_none() {
                eprintln!("Script ended without submitting; current state follows.");
                println!("{}", serde_json::to_string_pretty(wizard.state())?);
            }
        }
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stderr());
            if prompter.run(&mut wizard, &config, &mut submitter)?.is_none() {
                eprintln!("Cancelled; nothing was submitted.");
            }
        }
    }

    Ok(())
}

fn report(error: &WizardError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    let _ = io::stderr().flush();
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
