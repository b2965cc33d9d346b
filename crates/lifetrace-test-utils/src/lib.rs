//! Test utilities for lifetrace crates.

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Creates a temporary file with given content.
pub fn temp_file(content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("lifetrace.yaml");
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(_) => {}
        }
    };
}

/// Assert that a recorder call was rejected as a protocol violation for the
/// given hook.
#[macro_export]
macro_rules! assert_violation {
    ($expr:expr, $hook:expr) => {
        match $expr {
            Ok(v) => panic!("Expected protocol violation, got Ok: {:?}", v),
            Err(e) => {
                let rendered = e.to_string();
                assert!(
                    rendered.starts_with("protocol violation"),
                    "Expected protocol violation, got: {}",
                    rendered
                );
                assert!(
                    rendered.contains(&$hook.to_string()),
                    "Violation `{}` does not name hook {}",
                    rendered,
                    $hook
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_temp_file_creation() {
        let (_dir, path) = temp_file("capacity: 3");
        assert!(path.is_file());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "capacity: 3");
    }

    #[test]
    fn test_assert_macros() {
        let ok: Result<u8, String> = Ok(4);
        assert_eq!(assert_ok!(ok), 4);
        let err: Result<u8, String> = Err("boom".into());
        assert_err!(err);
    }

    #[test]
    fn test_assert_violation_accepts_matching_message() {
        let err: Result<(), String> =
            Err("protocol violation: on_ready delivered in phase checking: again".into());
        assert_violation!(err, "on_ready");
    }

    #[test]
    #[should_panic(expected = "Expected protocol violation")]
    fn test_assert_violation_rejects_ok() {
        let ok: Result<(), String> = Ok(());
        assert_violation!(ok, "on_ready");
    }

    proptest! {
        #[test]
        fn test_temp_file_content_roundtrip(content in "\\PC*") {
            let (_dir, path) = temp_file(&content);
            let read_content = std::fs::read_to_string(&path).unwrap();
            prop_assert_eq!(content, read_content);
        }
    }
}
