//! Error types for the surface figure crates.

use thiserror::Error;

/// Result type alias using SurfaceError.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Primary error type for figure rendering.
///
/// Numeric trouble (NaN or infinite heights) is not an error; it is written
/// into the document as-is. Only the output sink and config validation fail.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid render configuration for '{param}': {message}")]
    InvalidConfig { param: String, message: String },

    #[error("Failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}

impl SurfaceError {
    /// Whether the error came from the consumer going away mid-stream.
    pub fn is_disconnect(&self) -> bool {
        match self {
            SurfaceError::Io(err) => matches!(
                err.kind(),
                std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
            ),
            _ => false,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            SurfaceError::InvalidConfig { .. } => 400,
            SurfaceError::Io(_) => 500,
        }
    }
}
