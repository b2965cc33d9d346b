//! Lifecycle hook and log entry types for lifetrace.

mod change;
mod entry;
mod error;
mod hook;
mod phase;
mod sampling;

pub use change::{ChangeSet, PropertyChange};
pub use entry::{LogEntry, DEFAULT_TIME_FORMAT};
pub use error::{RecorderError, Result};
pub use hook::HookKind;
pub use phase::LifecyclePhase;
pub use sampling::SamplingPolicy;
