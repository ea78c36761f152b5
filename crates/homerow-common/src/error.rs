//! Common error types used throughout homerow.
//!
//! Every variant is scoped to a single request; none of them is meant to
//! bring the process down.

/// Common error type for homerow.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested route or media file does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The requested byte range starts at or past the end of the resource.
    #[error("Range not satisfiable for resource of {length} bytes")]
    RangeNotSatisfiable { length: u64 },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new RangeNotSatisfiable error for a resource of `length` bytes.
    pub fn range_not_satisfiable(length: u64) -> Self {
        Self::RangeNotSatisfiable { length }
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code this error maps to.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::RangeNotSatisfiable { .. } => 416,
            Self::Io(_) | Self::Internal(_) => 500,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
