//! Formatted log entries.

use crate::HookKind;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Default display format for entry timestamps.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// One immutable line of the lifecycle trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based position in the recorder's life. Never reused.
    pub sequence: u64,
    /// When the entry was created.
    pub timestamp: DateTime<Local>,
    /// Which notification produced the entry.
    pub hook: HookKind,
    /// Free-text payload.
    pub message: String,
    /// Rendered display form.
    pub line: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(sequence: u64, hook: HookKind, message: impl Into<String>, time_format: &str) -> Self {
        Self::at(Local::now(), sequence, hook, message, time_format)
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Local>,
        sequence: u64,
        hook: HookKind,
        message: impl Into<String>,
        time_format: &str,
    ) -> Self {
        let message = message.into();

        // An invalid format string surfaces as fmt::Error here.
        let mut time = String::new();
        if write!(time, "{}", timestamp.format(time_format)).is_err() {
            time = timestamp.format(DEFAULT_TIME_FORMAT).to_string();
        }

        let mut entry = Self {
            sequence,
            timestamp,
            hook,
            message,
            line: String::new(),
        };
        entry.line = format!("{time} {}: {}", entry.label(), entry.message);
        entry
    }

    /// The sequence-derived label, e.g. `#3 on_ready`.
    pub fn label(&self) -> String {
        format!("#{} {}", self.sequence, self.hook)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
