//! Lifecycle notification kinds.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A notification the host delivers to a managed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum HookKind {
    /// The instance was constructed.
    #[serde(rename = "on_create")]
    #[strum(serialize = "on_create")]
    Create,
    /// One or more bound inputs changed.
    #[serde(rename = "on_input_changed")]
    #[strum(serialize = "on_input_changed")]
    InputChanged,
    /// One-time setup finished.
    #[serde(rename = "on_ready")]
    #[strum(serialize = "on_ready")]
    Ready,
    /// A change-detection pass ran.
    #[serde(rename = "on_check")]
    #[strum(serialize = "on_check")]
    Check,
    /// Projected content was initialized.
    #[serde(rename = "on_content_ready")]
    #[strum(serialize = "on_content_ready")]
    ContentReady,
    /// Projected content was checked.
    #[serde(rename = "on_content_checked")]
    #[strum(serialize = "on_content_checked")]
    ContentChecked,
    /// The instance's view was initialized.
    #[serde(rename = "on_view_ready")]
    #[strum(serialize = "on_view_ready")]
    ViewReady,
    /// The instance's view was checked.
    #[serde(rename = "on_view_checked")]
    #[strum(serialize = "on_view_checked")]
    ViewChecked,
    /// The instance is being torn down.
    #[serde(rename = "on_destroy")]
    #[strum(serialize = "on_destroy")]
    Destroy,
    /// User-triggered counter increment.
    #[serde(rename = "increment")]
    #[strum(serialize = "increment")]
    Increment,
}

impl HookKind {
    /// Get all hook kinds in delivery order.
    pub fn all() -> impl Iterator<Item = Self> {
        use strum::IntoEnumIterator;
        Self::iter()
    }

    /// Hooks that fire on every change-detection pass and are sampled.
    pub fn is_sampled(&self) -> bool {
        matches!(self, Self::Check | Self::ContentChecked | Self::ViewChecked)
    }

    /// Hooks that may fire at most once per instance.
    pub fn is_once(&self) -> bool {
        matches!(
            self,
            Self::Create | Self::Ready | Self::ContentReady | Self::ViewReady | Self::Destroy
        )
    }
}
