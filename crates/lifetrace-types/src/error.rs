//! Recorder error types.

use crate::{HookKind, LifecyclePhase};
use thiserror::Error;

/// Errors surfaced by the lifecycle recorder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecorderError {
    /// A notification arrived outside its valid lifecycle window.
    #[error("protocol violation: {hook} delivered in phase {phase}: {reason}")]
    ProtocolViolation {
        hook: HookKind,
        phase: LifecyclePhase,
        reason: String,
    },

    /// The host counter cannot be incremented past `i64::MAX`.
    #[error("counter overflow: cannot increment {value}")]
    CounterOverflow { value: i64 },
}

impl RecorderError {
    /// Create a protocol violation.
    pub fn violation(hook: HookKind, phase: LifecyclePhase, reason: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            hook,
            phase,
            reason: reason.into(),
        }
    }

    /// The hook that triggered the error.
    pub fn hook(&self) -> HookKind {
        match self {
            Self::ProtocolViolation { hook, .. } => *hook,
            Self::CounterOverflow { .. } => HookKind::Increment,
        }
    }
}

/// Result type alias using the recorder's error.
pub type Result<T> = std::result::Result<T, RecorderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message() {
        let err = RecorderError::violation(
            HookKind::Ready,
            LifecyclePhase::Checking,
            "already ready",
        );
        assert_eq!(
            err.to_string(),
            "protocol violation: on_ready delivered in phase checking: already ready"
        );
        assert_eq!(err.hook(), HookKind::Ready);
    }

    #[test]
    fn test_overflow_message() {
        let err = RecorderError::CounterOverflow { value: i64::MAX };
        assert_eq!(
            err.to_string(),
            "counter overflow: cannot increment 9223372036854775807"
        );
        assert_eq!(err.hook(), HookKind::Increment);
    }
}
