//! # Error Types
//!
//! Domain-specific error types for ferro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  ferro-core errors (this file)                                      │
//! │  ├── CoreError        - Sale / draft rule violations                │
//! │  └── ValidationError  - Field-level input failures                  │
//! │                                                                     │
//! │  ferro-register errors (separate crate)                            │
//! │  ├── SubmitError      - Submission boundary failures                │
//! │  └── RegisterError    - Session-level wrapper                       │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → RegisterError → Operator      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line index, product id)
//! 3. Errors are enum variants, never String
//! 4. Every error here is locally recoverable: the operator corrects the
//!    offending field and retries, the draft survives untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised while editing or submitting a sale.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field failed validation before any computation ran.
    ///
    /// Covers unit_price < 0, quantity < 1 and tendered amount < 0: the
    /// recomputation produces no result for the offending row.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Two line items reference the same product.
    ///
    /// Within one sale a product may back at most one line. Raised both when
    /// the operator selects a product already bound to another line and as a
    /// final check at submission time (whole sale rejected, no partial
    /// submission).
    #[error("product {product_id} already appears in another line item")]
    DuplicateLineItem { product_id: String },

    /// Submission with zero line items.
    #[error("sale has no line items")]
    EmptySale,

    /// A line has not reached the Quantified state, so its subtotal is not
    /// computable and the sale cannot be submitted.
    #[error("line {line} is incomplete: {missing}")]
    IncompleteLine { line: usize, missing: &'static str },

    /// A line index that does not exist in the draft.
    #[error("no line item at index {line}")]
    NoSuchLine { line: usize },

    /// The selected product is inactive in the catalog.
    #[error("product {product_id} is not available for sale")]
    ProductInactive { product_id: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
///
/// Surfaced to the operator as a message against the offending field.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value must be at least one.
    #[error("{field} must be at least 1")]
    MustBeAtLeastOne { field: String },

    /// Invalid format (e.g. unparseable decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
