//! Error types for prioboard
//!
//! The store deliberately does not error on data-quality issues (out-of-range
//! scores, unknown ids); only categorical failures reach the caller. Load-time
//! decode failures are recovered locally and never appear here at all.

use thiserror::Error;

/// Main error type for prioboard operations
#[derive(Error, Debug)]
pub enum Error {
    /// The durable backend refused the write (quota exceeded, key evicted).
    /// No retry can succeed without user action, so this is surfaced as-is.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Attachment too large: {name} is {size} bytes (limit {limit})")]
    AttachmentTooLarge { name: String, size: u64, limit: u64 },

    #[error("Attachment read failed: {0}")]
    AttachmentRead(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for prioboard operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn messages_name_the_offending_file() {
        let err = Error::AttachmentTooLarge {
            name: "big.bin".to_string(),
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        };
        let text = err.to_string();
        assert!(text.contains("big.bin"));
        assert!(text.contains("6291456"));
    }
}
