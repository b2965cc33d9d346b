//! A deterministic host that drives a recorder the way a UI framework would.

use crate::{DiagnosticSink, LifecycleRecorder};
use lifetrace_config::RecorderConfig;
use lifetrace_types::{ChangeSet, PropertyChange, RecorderError, Result};
use serde::{Deserialize, Serialize};

/// Host-owned state of the managed instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentState {
    pub name: String,
    pub counter: i64,
}

/// A managed instance plus the recorder observing it.
///
/// Hooks are delivered in the host's order: creation, input changes, setup,
/// then one check / content-checked / view-checked triple per
/// change-detection pass.
#[derive(Debug)]
pub struct ManagedComponent {
    state: ComponentState,
    recorder: LifecycleRecorder,
    inputs_delivered: bool,
}

impl ManagedComponent {
    /// Construct the instance. Delivers `on_create`.
    pub fn new(config: &RecorderConfig, sink: impl DiagnosticSink + 'static) -> Result<Self> {
        let mut recorder = LifecycleRecorder::new(config, sink);
        recorder.on_create()?;
        Ok(Self {
            state: ComponentState::default(),
            recorder,
            inputs_delivered: false,
        })
    }

    /// Bind new input values. Only inputs whose value differs are delivered;
    /// the first binding delivers every input as a first change.
    pub fn set_inputs(&mut self, name: impl Into<String>, counter: i64) -> Result<()> {
        let name = name.into();
        let mut changes = ChangeSet::new();

        if !self.inputs_delivered {
            changes.insert("name", PropertyChange::first(name.as_str()));
            changes.insert("counter", PropertyChange::first(counter));
        } else {
            if name != self.state.name {
                changes.insert("name", PropertyChange::new(self.state.name.as_str(), name.as_str()));
            }
            if counter != self.state.counter {
                changes.insert("counter", PropertyChange::new(self.state.counter, counter));
            }
        }

        if changes.is_empty() {
            return Ok(());
        }

        self.recorder.on_input_changed(&changes)?;
        self.inputs_delivered = true;
        self.state = ComponentState { name, counter };
        Ok(())
    }

    /// Run one-time setup, interleaved with the first change-detection pass.
    pub fn mount(&mut self) -> Result<()> {
        self.recorder.on_ready()?;
        self.recorder.on_check()?;
        self.recorder.on_content_ready()?;
        self.recorder.on_content_checked()?;
        self.recorder.on_view_ready()?;
        self.recorder.on_view_checked()
    }

    /// Run one change-detection pass.
    pub fn detect_changes(&mut self) -> Result<()> {
        self.recorder.on_check()?;
        self.recorder.on_content_checked()?;
        self.recorder.on_view_checked()
    }

    /// User clicked increment: bump the counter, record it, re-render.
    /// At `i64::MAX` nothing is recorded and the state is kept.
    pub fn increment(&mut self) -> Result<()> {
        let value = self.state.counter;
        let next = value
            .checked_add(1)
            .ok_or(RecorderError::CounterOverflow { value })?;
        self.recorder.on_increment(next)?;
        self.state.counter = next;
        self.detect_changes()
    }

    /// Tear the instance down.
    pub fn destroy(&mut self) -> Result<()> {
        self.recorder.on_destroy()
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    pub fn recorder(&self) -> &LifecycleRecorder {
        &self.recorder
    }
}
