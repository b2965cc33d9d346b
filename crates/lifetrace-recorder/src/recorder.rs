//! The lifecycle event recorder.

use crate::{DiagnosticSink, LogBuffer, Sampler, TracingSink};
use lifetrace_config::RecorderConfig;
use lifetrace_types::{
    ChangeSet, HookKind, LifecyclePhase, LogEntry, RecorderError, Result, SamplingPolicy,
};
use serde::Serialize;
use tracing::{debug, error, trace, warn};

/// Occurrence counts of the sampled hooks, including suppressed calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CheckCounts {
    pub check: u64,
    pub content_checked: u64,
    pub view_checked: u64,
}

/// Read-only view of a recorder for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct RecorderSnapshot {
    pub phase: LifecyclePhase,
    pub notifications: u64,
    pub evicted: u64,
    pub check_counts: CheckCounts,
    pub entries: Vec<LogEntry>,
}

/// Observes the lifecycle notifications of one managed instance.
///
/// Every notification method validates the call against the instance's
/// lifecycle first. A call outside its window returns
/// [`RecorderError::ProtocolViolation`] and leaves the recorder untouched.
pub struct LifecycleRecorder {
    buffer: LogBuffer,
    sink: Box<dyn DiagnosticSink>,
    time_format: String,
    mirror_to_sink: bool,
    phase: LifecyclePhase,
    next_sequence: u64,
    notifications: u64,
    created: bool,
    content_ready: bool,
    view_ready: bool,
    checks: Sampler,
    content_checks: Sampler,
    view_checks: Sampler,
}

impl LifecycleRecorder {
    /// Create a recorder that mirrors to the given sink.
    pub fn new(config: &RecorderConfig, sink: impl DiagnosticSink + 'static) -> Self {
        let sampler = |hook| {
            Sampler::new(
                config
                    .sampling
                    .policy_for(hook)
                    .unwrap_or_else(SamplingPolicy::unsampled),
            )
        };
        Self {
            buffer: LogBuffer::new(config.capacity),
            sink: Box::new(sink),
            time_format: config.time_format.clone(),
            mirror_to_sink: config.mirror_to_sink,
            phase: LifecyclePhase::Created,
            next_sequence: 1,
            notifications: 0,
            created: false,
            content_ready: false,
            view_ready: false,
            checks: sampler(HookKind::Check),
            content_checks: sampler(HookKind::ContentChecked),
            view_checks: sampler(HookKind::ViewChecked),
        }
    }

    /// Create a recorder with default settings mirroring to `tracing`.
    pub fn with_defaults() -> Self {
        Self::new(&RecorderConfig::default(), TracingSink)
    }

    /// The instance was constructed.
    pub fn on_create(&mut self) -> Result<()> {
        self.guard(HookKind::Create)?;
        self.created = true;
        self.append(HookKind::Create, "instance created");
        Ok(())
    }

    /// Bound inputs changed. Logs one line per property in changeset order,
    /// then a summary line.
    pub fn on_input_changed(&mut self, changes: &ChangeSet) -> Result<()> {
        self.guard(HookKind::InputChanged)?;

        for (name, change) in changes.iter() {
            self.append(HookKind::InputChanged, change.describe(name));
        }

        let summary = match changes.len() {
            0 => "no inputs changed".to_string(),
            1 => format!("1 input changed: {}", changes.names().join(", ")),
            n => format!("{n} inputs changed: {}", changes.names().join(", ")),
        };
        self.append(HookKind::InputChanged, summary);

        if self.phase == LifecyclePhase::Created {
            self.phase = LifecyclePhase::InputsChanged;
        }
        Ok(())
    }

    /// One-time setup finished.
    pub fn on_ready(&mut self) -> Result<()> {
        self.guard(HookKind::Ready)?;
        self.phase = LifecyclePhase::Ready;
        self.append(HookKind::Ready, "initialized");
        Ok(())
    }

    /// A change-detection pass ran.
    pub fn on_check(&mut self) -> Result<()> {
        self.sampled(HookKind::Check)
    }

    /// Projected content was initialized.
    pub fn on_content_ready(&mut self) -> Result<()> {
        self.guard(HookKind::ContentReady)?;
        self.content_ready = true;
        self.enter_checking();
        self.append(HookKind::ContentReady, "projected content initialized");
        Ok(())
    }

    /// Projected content was checked.
    pub fn on_content_checked(&mut self) -> Result<()> {
        self.sampled(HookKind::ContentChecked)
    }

    /// The view was initialized.
    pub fn on_view_ready(&mut self) -> Result<()> {
        self.guard(HookKind::ViewReady)?;
        self.view_ready = true;
        self.enter_checking();
        self.append(HookKind::ViewReady, "view initialized");
        Ok(())
    }

    /// The view was checked.
    pub fn on_view_checked(&mut self) -> Result<()> {
        self.sampled(HookKind::ViewChecked)
    }

    /// The instance is being torn down. Nothing is accepted afterwards.
    pub fn on_destroy(&mut self) -> Result<()> {
        self.guard(HookKind::Destroy)?;
        self.phase = LifecyclePhase::Destroyed;
        self.append(HookKind::Destroy, "instance destroyed");
        Ok(())
    }

    /// The user incremented the counter.
    pub fn on_increment(&mut self, value: i64) -> Result<()> {
        self.guard(HookKind::Increment)?;
        self.append(HookKind::Increment, format!("counter incremented to {value}"));
        Ok(())
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.buffer.iter()
    }

    /// Retained lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lines()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Notifications accepted so far, sampled-out checks included.
    pub fn notifications(&self) -> u64 {
        self.notifications
    }

    pub fn check_counts(&self) -> CheckCounts {
        CheckCounts {
            check: self.checks.occurrences(),
            content_checked: self.content_checks.occurrences(),
            view_checked: self.view_checks.occurrences(),
        }
    }

    pub fn snapshot(&self) -> RecorderSnapshot {
        RecorderSnapshot {
            phase: self.phase,
            notifications: self.notifications,
            evicted: self.buffer.evicted(),
            check_counts: self.check_counts(),
            entries: self.buffer.to_vec(),
        }
    }

    /// Serialize the current snapshot as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    fn sampled(&mut self, hook: HookKind) -> Result<()> {
        self.guard(hook)?;
        self.enter_checking();

        let sampler = match hook {
            HookKind::ContentChecked => &mut self.content_checks,
            HookKind::ViewChecked => &mut self.view_checks,
            _ => &mut self.checks,
        };
        let (occurrence, admitted) = sampler.tick();

        if admitted {
            let message = match hook {
                HookKind::ContentChecked => format!("projected content checked #{occurrence}"),
                HookKind::ViewChecked => format!("view checked #{occurrence}"),
                _ => format!("check #{occurrence}"),
            };
            self.append(hook, message);
        } else {
            trace!(hook = %hook, occurrence, "sampled out");
        }
        Ok(())
    }

    fn enter_checking(&mut self) {
        if self.phase == LifecyclePhase::Ready {
            self.phase = LifecyclePhase::Checking;
        }
    }

    /// Reject a notification outside its lifecycle window. Counts it as
    /// accepted otherwise.
    fn guard(&mut self, hook: HookKind) -> Result<()> {
        let reason = self.violation_reason(hook);
        if let Some(reason) = reason {
            let err = RecorderError::violation(hook, self.phase, reason);
            error!(hook = %hook, phase = %self.phase, "{err}");
            return Err(err);
        }
        self.notifications += 1;
        Ok(())
    }

    fn violation_reason(&self, hook: HookKind) -> Option<&'static str> {
        if self.phase.is_terminal() {
            return Some("instance already destroyed");
        }

        if hook.is_once() && self.delivered(hook) {
            return Some("already delivered");
        }

        let ready = self.phase.is_ready();
        match hook {
            HookKind::Create if self.notifications > 0 => {
                Some("on_create must be the first notification")
            }
            HookKind::Check if !ready => Some("delivered before on_ready"),
            HookKind::ContentReady if !ready => Some("delivered before on_ready"),
            HookKind::ContentChecked if !self.content_ready => {
                Some("delivered before on_content_ready")
            }
            HookKind::ViewReady if !ready => Some("delivered before on_ready"),
            HookKind::ViewChecked if !self.view_ready => Some("delivered before on_view_ready"),
            _ => None,
        }
    }

    /// Whether a once-only hook has already been accepted.
    fn delivered(&self, hook: HookKind) -> bool {
        match hook {
            HookKind::Create => self.created,
            HookKind::Ready => self.phase.is_ready(),
            HookKind::ContentReady => self.content_ready,
            HookKind::ViewReady => self.view_ready,
            HookKind::Destroy => self.phase.is_terminal(),
            _ => false,
        }
    }

    fn append(&mut self, hook: HookKind, message: impl Into<String>) {
        let entry = LogEntry::new(self.next_sequence, hook, message, &self.time_format);
        self.next_sequence += 1;

        if self.mirror_to_sink {
            self.sink.emit(&entry);
        }
        debug!(sequence = entry.sequence, hook = %hook, "recorded");

        if let Some(evicted) = self.buffer.push(entry) {
            if self.buffer.evicted() == 1 {
                warn!(
                    capacity = self.buffer.capacity(),
                    "log buffer full, evicting oldest entries"
                );
            }
            trace!(sequence = evicted.sequence, "evicted");
        }
    }
}

impl Default for LifecycleRecorder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for LifecycleRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleRecorder")
            .field("phase", &self.phase)
            .field("len", &self.buffer.len())
            .field("notifications", &self.notifications)
            .field("check_counts", &self.check_counts())
            .finish_non_exhaustive()
    }
}
