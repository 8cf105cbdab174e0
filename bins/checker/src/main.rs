//! IbanCheck command line.
//!
//! Validates IBANs given on the command line, or executes check-IBAN tasks
//! read as JSON lines from stdin.

mod logging;
mod report;
mod tasks;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ibancheck_core::CheckIbanWorker;
use ibancheck_shared::{AppConfig, AppError};
use tracing::debug;

use report::IbanReport;

#[derive(Parser)]
#[command(name = "ibancheck", version, about = "IBAN validation and bank entity resolution")]
struct Cli {
    /// Indent JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a JSON report for each IBAN. Exits non-zero if any is invalid.
    Validate {
        /// IBANs to check; quote IBANs written with spaces.
        #[arg(required = true)]
        ibans: Vec<String>,
    },
    /// Execute check-IBAN tasks read as JSON lines from stdin.
    Run,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load().map_err(AppError::from)?;
    logging::init(&config.logging);
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Validate { ibans } => cmd_validate(&ibans, cli.pretty),
        Command::Run => cmd_run(CheckIbanWorker::new(config.worker), cli.pretty),
    }
}

fn cmd_validate(ibans: &[String], pretty: bool) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    let mut all_valid = true;

    for raw in ibans {
        let report = IbanReport::build(raw);
        all_valid &= report.valid;
        let encoded = if pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("encode report")?;
        writeln!(stdout, "{encoded}").context("write report")?;
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_run(worker: CheckIbanWorker, pretty: bool) -> Result<ExitCode> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    tasks::process(&worker, stdin, stdout, pretty)?;
    Ok(ExitCode::SUCCESS)
}
