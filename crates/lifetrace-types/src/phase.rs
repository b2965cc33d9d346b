//! Managed instance lifecycle phases.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Where a managed instance is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LifecyclePhase {
    /// Constructed, no one-time setup yet.
    #[default]
    Created,
    /// Inputs delivered before setup.
    InputsChanged,
    /// One-time setup finished.
    Ready,
    /// Change-detection passes are running.
    Checking,
    /// Torn down. Terminal.
    Destroyed,
}

impl LifecyclePhase {
    /// Is the instance in a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Destroyed)
    }

    /// Has one-time setup run?
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready | Self::Checking)
    }
}
