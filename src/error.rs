//! Error types for the scheduler
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SchedulerError
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Unified error type for scheduler operations
#[derive(Debug, Error)]
pub enum SchedulerError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Frame too large: {0} bytes (max 65535)")]
    FrameTooLarge(usize),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Fixture(err.to_string())
    }
}

impl SchedulerError {
    /// True when the error means the peer is gone (EOF, reset, aborted, broken pipe)
    pub fn is_disconnect(&self) -> bool {
        match self {
            SchedulerError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}
