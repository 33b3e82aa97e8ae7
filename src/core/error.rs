// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error type for cdrbuffer.
//!
//! Every failure is reported as a [`CodecError`] carrying a human-readable
//! message. There is no structured error code: callers that need to
//! dispatch on the cause must wrap the signal in their own error type.
//!
//! Causes reported by the buffer layer:
//! - Invalid construction (empty region)
//! - Capacity exceeded (advance past the end of the region)
//! - Invalid restore (foreign checkpoint or position past capacity)

use thiserror::Error;

/// Error signal returned by buffer operations.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CodecError {
    message: String,
}

impl CodecError {
    /// Create an error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        CodecError {
            message: message.into(),
        }
    }

    /// Create an "invalid construction" error for an empty region.
    pub fn invalid_construction() -> Self {
        CodecError::new("Invalid construction: buffer region must be non-empty")
    }

    /// Create a "capacity exceeded" error.
    pub fn capacity_exceeded(requested: usize, available: usize, position: usize) -> Self {
        CodecError::new(format!(
            "Capacity exceeded: requested {requested} bytes at position {position}, but only {available} bytes remaining"
        ))
    }

    /// Create an "invalid restore" error.
    pub fn invalid_restore(reason: impl AsRef<str>) -> Self {
        CodecError::new(format!("Invalid restore: {}", reason.as_ref()))
    }

    /// The stored message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        vec![("message", self.message.clone())]
    }
}

impl From<String> for CodecError {
    fn from(message: String) -> Self {
        CodecError { message }
    }
}

impl From<&str> for CodecError {
    fn from(message: &str) -> Self {
        CodecError::new(message)
    }
}

/// Result type for cdrbuffer operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = CodecError::new("something went wrong");
        assert_eq!(err.message(), "something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_invalid_construction_error() {
        let err = CodecError::invalid_construction();
        assert_eq!(
            err.to_string(),
            "Invalid construction: buffer region must be non-empty"
        );
    }

    #[test]
    fn test_capacity_exceeded_error() {
        let err = CodecError::capacity_exceeded(20, 12, 4);
        assert_eq!(
            err.to_string(),
            "Capacity exceeded: requested 20 bytes at position 4, but only 12 bytes remaining"
        );
    }

    #[test]
    fn test_invalid_restore_error() {
        let err = CodecError::invalid_restore("checkpoint issued by another buffer");
        assert_eq!(
            err.message(),
            "Invalid restore: checkpoint issued by another buffer"
        );
    }

    #[test]
    fn test_causes_have_distinct_messages() {
        let construction = CodecError::invalid_construction();
        let capacity = CodecError::capacity_exceeded(1, 0, 0);
        let restore = CodecError::invalid_restore("x");
        assert_ne!(construction.message(), capacity.message());
        assert_ne!(capacity.message(), restore.message());
        assert_ne!(construction.message(), restore.message());
    }

    #[test]
    fn test_from_string_and_str() {
        let owned: CodecError = String::from("owned").into();
        let borrowed: CodecError = "borrowed".into();
        assert_eq!(owned.message(), "owned");
        assert_eq!(borrowed.message(), "borrowed");
    }

    #[test]
    fn test_error_clone() {
        let err1 = CodecError::invalid_restore("stale");
        let err2 = err1.clone();
        drop(err1);
        assert_eq!(err2.message(), "Invalid restore: stale");
    }

    #[test]
    fn test_log_fields() {
        let err = CodecError::new("msg");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "message");
        assert_eq!(fields[0].1, "msg");
    }

    #[test]
    fn test_error_debug_format() {
        let err = CodecError::new("message");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("CodecError"));
        assert!(debug_str.contains("message"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&CodecError::new("x"));
    }
}
