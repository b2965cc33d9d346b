//! Environment variable handling.

use crate::loader::{validate, ConfigError};
use crate::types::RecorderConfig;
use std::env;
use std::str::FromStr;

/// Environment variable names.
pub mod vars {
    pub const LIFETRACE_CONFIG: &str = "LIFETRACE_CONFIG";
    pub const LIFETRACE_CAPACITY: &str = "LIFETRACE_CAPACITY";
    pub const LIFETRACE_TIME_FORMAT: &str = "LIFETRACE_TIME_FORMAT";
    pub const LIFETRACE_MIRROR: &str = "LIFETRACE_MIRROR";
    pub const LIFETRACE_CHECK_BURST: &str = "LIFETRACE_CHECK_BURST";
    pub const LIFETRACE_CHECK_INTERVAL: &str = "LIFETRACE_CHECK_INTERVAL";
}

/// Load `.env` files in order; later files override earlier ones.
pub fn load_dotenv() {
    let _ = dotenvy::from_filename(".env");
    let _ = dotenvy::from_filename(".env.local");
}

impl RecorderConfig {
    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(capacity) = parse_var(&lookup, vars::LIFETRACE_CAPACITY)? {
            self.capacity = capacity;
        }
        if let Some(format) = lookup(vars::LIFETRACE_TIME_FORMAT) {
            self.time_format = format;
        }
        if let Some(mirror) = lookup(vars::LIFETRACE_MIRROR) {
            self.mirror_to_sink = matches!(mirror.to_lowercase().as_str(), "true" | "1" | "yes");
        }
        if let Some(burst) = parse_var(&lookup, vars::LIFETRACE_CHECK_BURST)? {
            self.sampling.check.burst = burst;
        }
        if let Some(interval) = parse_var(&lookup, vars::LIFETRACE_CHECK_INTERVAL)? {
            self.sampling.check.interval = interval;
        }

        validate(self)
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidEnv {
                var: var.to_string(),
                message: e.to_string(),
            }),
    }
}
