//! Application error types.

use std::fmt;
use std::io;

/// Errors that can occur during application lifecycle.
#[derive(Debug)]
pub enum AppError {
    /// Failed to bind the listen address.
    Bind { addr: String, source: io::Error },

    /// The server stopped with an I/O error.
    Serve(io::Error),

    /// Failed to create the Tokio runtime.
    RuntimeCreation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Bind { addr, source } => {
                write!(f, "Failed to bind {}: {}", addr, source)
            }
            AppError::Serve(e) => {
                write!(f, "Server error: {}", e)
            }
            AppError::RuntimeCreation(msg) => {
                write!(f, "Failed to create Tokio runtime: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Bind { source, .. } => Some(source),
            AppError::Serve(e) => Some(e),
            AppError::RuntimeCreation(_) => None,
        }
    }
}
