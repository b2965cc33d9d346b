//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use lifetrace_config::{vars, ConfigLoader, RecorderConfig};

use crate::commands::{ConfigCommand, RunCommand};
use crate::error::CliError;

/// lifetrace - record the lifecycle of a managed component
#[derive(Debug, Parser)]
#[command(name = "lifetrace", author, version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = vars::LIFETRACE_CONFIG,
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Drive a demo component through its lifecycle and print the trace
    Run(RunCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Load configuration from `--config`, else `./lifetrace.yaml`, then
    /// apply environment overrides.
    pub fn load_config(&self) -> Result<RecorderConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ConfigLoader::new(".").load()?,
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Execute the selected command.
    pub fn execute(&self, config: RecorderConfig) -> Result<(), CliError> {
        match &self.command {
            Command::Run(cmd) => cmd.execute(&config, self.format),
            Command::Config(cmd) => cmd.execute(&config, self.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["lifetrace", "run"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Command::Run(cmd) => {
                assert_eq!(cmd.name, "Ada");
                assert_eq!(cmd.checks, 3);
                assert_eq!(cmd.increments, 2);
                assert!(cmd.rename.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lifetrace", "run", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["lifetrace", "-q", "-v", "run"]).is_err());
    }
}
