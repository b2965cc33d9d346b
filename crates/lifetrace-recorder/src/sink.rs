//! Secondary diagnostic sinks that mirror recorded lines.

use lifetrace_types::LogEntry;
use std::sync::{Arc, Mutex};
use tracing::info;

/// `tracing` target used when mirroring hook lines.
pub const HOOK_LOG_TARGET: &str = "lifetrace::hooks";

/// Receives a copy of every line the recorder appends.
pub trait DiagnosticSink: Send {
    fn emit(&mut self, entry: &LogEntry);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&LogEntry) + Send,
{
    fn emit(&mut self, entry: &LogEntry) {
        self(entry)
    }
}

/// Mirrors lines to the process log through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, entry: &LogEntry) {
        info!(
            target: HOOK_LOG_TARGET,
            sequence = entry.sequence,
            hook = %entry.hook,
            "{}",
            entry.line
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _entry: &LogEntry) {}
}

/// Keeps an unbounded copy of mirrored lines.
///
/// Clones share storage, so a caller can keep one handle while the
/// recorder owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, entry: &LogEntry) {
        let mut lines = self
            .lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        lines.push(entry.line.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifetrace_types::{HookKind, DEFAULT_TIME_FORMAT};

    fn entry(sequence: u64) -> LogEntry {
        LogEntry::new(sequence, HookKind::Create, "instance created", DEFAULT_TIME_FORMAT)
    }

    #[test]
    fn test_memory_sink_shares_storage() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();
        let first = entry(1);
        handle.emit(&first);
        assert_eq!(sink.lines(), vec![first.line]);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: &LogEntry| seen.push(e.sequence);
            sink.emit(&entry(4));
            sink.emit(&entry(5));
        }
        assert_eq!(seen, vec![4, 5]);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.emit(&entry(1));
        NullSink.emit(&entry(2));
    }
}
