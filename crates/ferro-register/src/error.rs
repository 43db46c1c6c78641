//! # Register Errors
//!
//! Session-level error types, one layer above ferro-core.
//!
//! Flow: `ValidationError → CoreError → RegisterError → operator message`.
//! Every variant is recoverable within the session; a rejected edit or
//! submission leaves the draft intact for correct-and-retry.

use thiserror::Error;

use ferro_core::CoreError;

// =============================================================================
// Submit Error
// =============================================================================

/// Failures at the submission boundary.
///
/// The collaborator behind [`crate::SaleSubmitter`] either rejects the
/// payload outright or fails on its own side; either way no partial sale is
/// recorded.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The collaborator rejected the submission (its own validation).
    #[error("submission rejected: {reason}")]
    Rejected { reason: String },

    /// The collaborator failed while recording the sale.
    #[error("submission backend failed: {0}")]
    Backend(String),
}

// =============================================================================
// Register Error
// =============================================================================

/// Anything the register session can surface to the operator.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// A business rule or input validation failure from ferro-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A submission boundary failure.
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// Register configuration is unusable.
    #[error("invalid register config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

// =============================================================================
// Unit Tests
// =============================================================================
