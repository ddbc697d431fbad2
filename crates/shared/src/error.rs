//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Domain crates define their own precise error enums; this type is the
/// coarse classification a caller-facing surface maps them onto. Every
/// failure is synchronous and leaves ledger state unchanged - retrying is
/// the caller's responsibility after correcting the violated precondition.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input shape (zero goal, zero amount, past deadline at creation).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrong caller for the operation.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Operation attempted outside its allowed time window.
    #[error("Timing violation: {0}")]
    Timing(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// State conflict (e.g. double collection).
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Timing(_) => "TIMING_VIOLATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Timing(_) => 400,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
        }
    }
}
