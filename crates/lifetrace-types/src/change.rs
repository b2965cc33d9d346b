//! Input changesets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for a value that is missing or malformed.
const UNKNOWN: &str = "unknown";
/// Placeholder for the previous value of a first change.
const UNSET: &str = "unset";

/// Previous and current value of one changed input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyChange {
    /// Value before the change.
    #[serde(default)]
    pub previous: Option<Value>,
    /// Value after the change.
    #[serde(default)]
    pub current: Option<Value>,
    /// Whether this is the first value ever delivered.
    #[serde(default)]
    pub first_change: bool,
}

impl PropertyChange {
    /// Create a change between two values.
    pub fn new(previous: impl Into<Value>, current: impl Into<Value>) -> Self {
        Self {
            previous: Some(previous.into()),
            current: Some(current.into()),
            first_change: false,
        }
    }

    /// Create the first change of an input.
    pub fn first(current: impl Into<Value>) -> Self {
        Self {
            previous: None,
            current: Some(current.into()),
            first_change: true,
        }
    }

    /// Parse one entry of a changeset, tolerating missing or malformed fields.
    ///
    /// Accepts `previous`/`current`/`first_change` as well as the camelCase
    /// `previousValue`/`currentValue`/`firstChange` shape.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let field = |a: &str, b: &str| obj.get(a).or_else(|| obj.get(b)).cloned();

        Self {
            previous: field("previous", "previousValue"),
            current: field("current", "currentValue"),
            first_change: obj
                .get("first_change")
                .or_else(|| obj.get("firstChange"))
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// Display form of the previous value.
    pub fn previous_display(&self) -> String {
        match &self.previous {
            None if self.first_change => UNSET.to_string(),
            other => display_value(other.as_ref()),
        }
    }

    /// Display form of the current value.
    pub fn current_display(&self) -> String {
        display_value(self.current.as_ref())
    }

    /// One-line description of this change.
    pub fn describe(&self, name: &str) -> String {
        let mut line = format!(
            "{name} changed from {} to {}",
            self.previous_display(),
            self.current_display()
        );
        if self.first_change {
            line.push_str(" (first change)");
        }
        line
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Ordered mapping from input name to its change.
///
/// Iteration order is insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeSet {
    changes: Vec<(String, PropertyChange)>,
}

impl ChangeSet {
    /// Create an empty changeset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a change. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, change: PropertyChange) {
        let name = name.into();
        match self.changes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = change,
            None => self.changes.push((name, change)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, change: PropertyChange) -> Self {
        self.insert(name, change);
        self
    }

    /// Parse a changeset from a JSON object.
    ///
    /// Anything other than an object yields an empty changeset; malformed
    /// entries keep their name with unknown values.
    pub fn from_json(value: &Value) -> Self {
        let changes = value
            .as_object()
            .map(|obj| {
                obj.iter()
                    .map(|(name, entry)| (name.clone(), PropertyChange::from_json(entry)))
                    .collect()
            })
            .unwrap_or_default();
        Self { changes }
    }

    /// Look up a change by input name.
    pub fn get(&self, name: &str) -> Option<&PropertyChange> {
        self.changes.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Iterate changes in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyChange)> {
        self.changes.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Input names in delivery order.
    pub fn names(&self) -> Vec<&str> {
        self.changes.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, PropertyChange)> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = (N, PropertyChange)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, change) in iter {
            set.insert(name, change);
        }
        set
    }
}
