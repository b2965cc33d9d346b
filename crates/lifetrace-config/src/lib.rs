//! Configuration types for lifetrace.
//!
//! Recorder settings live in a YAML file (usually `lifetrace.yaml`) and can
//! be overridden from `LIFETRACE_*` environment variables.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;
