//! Bounded, display-ordered log storage.

use lifetrace_types::LogEntry;
use std::collections::VecDeque;

/// FIFO buffer of log entries with a fixed cap.
///
/// Appending past the cap evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    evicted: u64,
}

impl LogBuffer {
    /// Create a buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Append an entry, returning the evicted one if the cap was reached.
    pub fn push(&mut self, entry: LogEntry) -> Option<LogEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.evicted += 1;
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Rendered lines oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.line.clone()).collect()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Copy of the retained entries.
    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries dropped to honor the cap.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifetrace_types::{HookKind, DEFAULT_TIME_FORMAT};
    use proptest::prelude::*;

    fn entry(sequence: u64) -> LogEntry {
        LogEntry::new(sequence, HookKind::Check, format!("check #{sequence}"), DEFAULT_TIME_FORMAT)
    }

    #[test]
    fn test_push_under_capacity() {
        let mut buffer = LogBuffer::new(3);
        assert!(buffer.push(entry(1)).is_none());
        assert!(buffer.push(entry(2)).is_none());
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.evicted(), 0);
        assert_eq!(buffer.latest().unwrap().sequence, 2);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut buffer = LogBuffer::new(2);
        buffer.push(entry(1));
        buffer.push(entry(2));
        let evicted = buffer.push(entry(3)).unwrap();
        assert_eq!(evicted.sequence, 1);
        let kept: Vec<u64> = buffer.iter().map(|e| e.sequence).collect();
        assert_eq!(kept, vec![2, 3]);
        assert_eq!(buffer.evicted(), 1);
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut buffer = LogBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push(entry(1));
        let second = entry(2);
        buffer.push(second.clone());
        assert_eq!(buffer.lines(), vec![second.line]);
    }

    proptest! {
        #[test]
        fn prop_length_is_capped(capacity in 1usize..80, pushes in 0u64..200) {
            let mut buffer = LogBuffer::new(capacity);
            for seq in 1..=pushes {
                buffer.push(entry(seq));
            }
            prop_assert_eq!(buffer.len() as u64, pushes.min(capacity as u64));
            prop_assert_eq!(buffer.evicted(), pushes.saturating_sub(capacity as u64));

            let kept: Vec<u64> = buffer.iter().map(|e| e.sequence).collect();
            let first_kept = pushes.saturating_sub(capacity as u64) + 1;
            let expected: Vec<u64> = (first_kept..=pushes).collect();
            prop_assert_eq!(kept, expected);
        }
    }
}
