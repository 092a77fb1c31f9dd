//! Error handling for sarf-store
//!
//! Wraps sarf-core ExError with loader-specific helpers

use std::path::Path;

use sarf_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a file the loader could not read
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an error for a rejected data line (strict loading)
pub fn line_rejected(operation: &str, line: usize, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation)
        .with_line(line)
        .with_message(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_kind_and_path() {
        let err = io_error(
            "load_roots",
            Path::new("/missing/roots.txt"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.entity_id(), Some("/missing/roots.txt"));
        assert_eq!(err.op(), Some("load_roots"));
    }

    #[test]
    fn test_line_rejected_carries_line() {
        let err = line_rejected("load_schemes", 4, "missing separator");
        assert_eq!(err.code(), "ERR_INVALID_INPUT");
        assert_eq!(err.line(), Some(4));
    }
}
