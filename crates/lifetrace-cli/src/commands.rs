//! Command implementations.

use clap::{Args, Subcommand};
use lifetrace_config::RecorderConfig;
use lifetrace_recorder::{ManagedComponent, TracingSink};
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Drive a demo component through its lifecycle
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Initial value of the `name` input
    #[arg(long, default_value = "Ada")]
    pub name: String,

    /// Initial value of the `counter` input
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub counter: i64,

    /// Rebind `name` to this value before destroying the component
    #[arg(long)]
    pub rename: Option<String>,

    /// Extra change-detection passes after mounting
    #[arg(long, default_value_t = 3)]
    pub checks: u32,

    /// Number of user increments
    #[arg(long, default_value_t = 2)]
    pub increments: u32,
}

impl RunCommand {
    pub fn execute(&self, config: &RecorderConfig, format: OutputFormat) -> Result<(), CliError> {
        let mut component = ManagedComponent::new(config, TracingSink)?;

        component.set_inputs(self.name.as_str(), self.counter)?;
        component.mount()?;
        for _ in 0..self.checks {
            component.detect_changes()?;
        }
        for _ in 0..self.increments {
            component.increment()?;
        }
        if let Some(rename) = &self.rename {
            let counter = component.state().counter;
            component.set_inputs(rename.as_str(), counter)?;
            component.detect_changes()?;
        }
        component.destroy()?;

        let recorder = component.recorder();
        info!(
            entries = recorder.len(),
            notifications = recorder.notifications(),
            "run finished"
        );

        match format {
            OutputFormat::Text => {
                for line in recorder.lines() {
                    println!("{line}");
                }
            }
            OutputFormat::Json => {
                let json = recorder
                    .to_json()
                    .map_err(|e| CliError::Output(e.to_string()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

/// Configuration commands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

impl ConfigCommand {
    pub fn execute(&self, config: &RecorderConfig, format: OutputFormat) -> Result<(), CliError> {
        match self {
            Self::Show => {
                let rendered = match format {
                    OutputFormat::Text => config.to_yaml().map_err(|e| CliError::Output(e.to_string()))?,
                    OutputFormat::Json => config.to_json().map_err(|e| CliError::Output(e.to_string()))?,
                };
                println!("{rendered}");
                Ok(())
            }
        }
    }
}
