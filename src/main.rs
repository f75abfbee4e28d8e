use anyhow::{Context, Result};
use clap::Parser;
use spreader_detector::cli::{usage_error, Cli};
use spreader_detector::config::{load_config, OUTPUT_FILE};
use spreader_detector::{run_files, Error, RunSummary};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_error(&e) {
            Some(err) => return report(&err),
            // --help / --version
            None => e.exit(),
        },
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let summary = match analyze(&cli) {
        Ok(summary) => summary,
        Err(e) => return report(&e),
    };

    if cli.summary {
        if let Err(e) = print_summary(&summary) {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

// Config errors surface before any roster, contact or report file is opened
fn analyze(cli: &Cli) -> spreader_detector::Result<RunSummary> {
    let config = load_config(cli.config.as_deref())?;
    log::debug!("Effective configuration: {:?}", config);

    run_files(&cli.people, &cli.meetings, Path::new(OUTPUT_FILE), &config)
}

fn report(e: &Error) -> ExitCode {
    eprintln!("{}", e.headline());
    eprintln!("{} [{}]", e, e.code());
    ExitCode::from(e.exit_code() as u8)
}

fn print_summary(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
    println!("{}", json);
    Ok(())
}
