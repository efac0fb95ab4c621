//! sprout CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Destination does not exist
//! - 3: Project directory could not be created
//! - 4: Template copy failed
//! - 5: No templates available

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod prompt;
mod settings;
mod wizard;

use cli::Cli;
use prompt::TerminalPrompter;
use settings::Settings;
use sprout_runner::ShellInstaller;
use sprout_templates::TemplateError;
use wizard::{Wizard, WizardError};

/// Shell-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const DESTINATION_MISSING: u8 = 2;
    pub const PROJECT_CREATION: u8 = 3;
    pub const COPY_FAILED: u8 = 4;
    pub const NO_TEMPLATES: u8 = 5;
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,sprout_cli=debug,sprout_templates=debug,sprout_runner=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber installed earlier keeps precedence
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

async fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli)?;

    let mut wizard = Wizard::new(&settings, TerminalPrompter::new(), ShellInstaller::new());
    let summary = wizard.run().await?;
    info!(
        "Created {} file(s) and {} director(ies) in {:?}",
        summary.report.files, summary.report.directories, summary.location.project_path
    );

    if summary.install.is_some() {
        println!();
    }
    println!("{}", summary.closing_message());
    Ok(())
}

/// Map an error to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<WizardError>() {
        Some(WizardError::Template(err)) => match err {
            TemplateError::DestinationMissing(_) => ExitCodes::DESTINATION_MISSING,
            TemplateError::ProjectCreation { .. } => ExitCodes::PROJECT_CREATION,
            TemplateError::Copy { .. } => ExitCodes::COPY_FAILED,
            TemplateError::RootMissing(_) | TemplateError::NoTemplates(_) => {
                ExitCodes::NO_TEMPLATES
            }
            _ => ExitCodes::GENERAL_ERROR,
        },
        _ => ExitCodes::GENERAL_ERROR,
    }
}
