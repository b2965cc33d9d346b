//! Lifecycle event recorder for lifetrace.
//!
//! A host delivers lifecycle notifications to a [`LifecycleRecorder`], which
//! turns each one into a timestamped, sequence-numbered line. Lines are kept
//! in a bounded [`LogBuffer`] for display and mirrored to a
//! [`DiagnosticSink`]. High-frequency check hooks are sampled so they cannot
//! flood the buffer.

mod buffer;
mod host;
mod recorder;
mod sampler;
mod sink;

pub use buffer::LogBuffer;
pub use host::{ComponentState, ManagedComponent};
pub use recorder::{CheckCounts, LifecycleRecorder, RecorderSnapshot};
pub use sampler::Sampler;
pub use sink::{DiagnosticSink, MemorySink, NullSink, TracingSink, HOOK_LOG_TARGET};

// Re-export types for convenience
pub use lifetrace_config::{RecorderConfig, SamplingConfig};
pub use lifetrace_types::{
    ChangeSet, HookKind, LifecyclePhase, LogEntry, PropertyChange, RecorderError, Result,
    SamplingPolicy,
};
