//! Configuration type definitions.

use lifetrace_types::{HookKind, SamplingPolicy, DEFAULT_TIME_FORMAT};
use serde::{Deserialize, Serialize};

/// Default maximum number of retained log entries.
pub const DEFAULT_CAPACITY: usize = 50;

/// Recorder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Maximum entries retained before the oldest is evicted.
    pub capacity: usize,
    /// `chrono` format string for entry timestamps.
    pub time_format: String,
    /// Mirror every recorded line to the diagnostic sink.
    pub mirror_to_sink: bool,
    /// Sampling for high-frequency hooks.
    pub sampling: SamplingConfig,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            mirror_to_sink: true,
            sampling: SamplingConfig::default(),
        }
    }
}

impl RecorderConfig {
    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Render as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Per-hook sampling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub check: SamplingPolicy,
    pub content_checked: SamplingPolicy,
    pub view_checked: SamplingPolicy,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            check: SamplingPolicy::check(),
            content_checked: SamplingPolicy::child_check(),
            view_checked: SamplingPolicy::child_check(),
        }
    }
}

impl SamplingConfig {
    /// Policy for a sampled hook, `None` for hooks that are always recorded.
    pub fn policy_for(&self, hook: HookKind) -> Option<SamplingPolicy> {
        match hook {
            HookKind::Check => Some(self.check),
            HookKind::ContentChecked => Some(self.content_checked),
            HookKind::ViewChecked => Some(self.view_checked),
            _ => None,
        }
    }

    /// Record every occurrence of every hook.
    pub fn unsampled() -> Self {
        Self {
            check: SamplingPolicy::unsampled(),
            content_checked: SamplingPolicy::unsampled(),
            view_checked: SamplingPolicy::unsampled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_for_sampled_hooks_only() {
        let sampling = SamplingConfig::default();
        for hook in HookKind::all() {
            assert_eq!(sampling.policy_for(hook).is_some(), hook.is_sampled(), "{hook}");
        }
    }
}
