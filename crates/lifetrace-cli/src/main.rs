//! lifetrace CLI
//!
//! Main entry point for the `lifetrace` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;
mod commands;
mod error;

use cli::Cli;
use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    lifetrace_config::load_dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("warning: {e}");
    }

    match run(cli) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    cli.execute(config)
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    use lifetrace_log::{LogConfig, LogLevel};

    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config.level = LogLevel::from_verbosity(cli.verbose, cli.quiet);
    } else if std::env::var("LIFETRACE_LOG_LEVEL").is_err() && std::env::var("RUST_LOG").is_err() {
        config.level = LogLevel::Warn;
    }

    lifetrace_log::init(config)?;
    Ok(())
}
