//! # Submission Boundary
//!
//! The seam between sale entry and the surrounding application.
//!
//! Everything this crate excludes by design - persistence, receipt-number
//! assignment, routing, templating - lives behind [`SaleSubmitter`]. The
//! register hands over a frozen [`SaleSubmission`] and gets back either the
//! recorded [`Sale`] or a rejection; there is no partial submission.

use ferro_core::{Sale, SaleSubmission};

use crate::error::SubmitError;

/// The collaborator that records a finalized sale.
///
/// ## Contract
/// - Assigns the receipt number (not this crate's responsibility)
/// - Persists atomically: on any failure, nothing is recorded
/// - Returns the immutable `Sale` record exactly as stored, so the caller
///   can reconcile it against its own figures
pub trait SaleSubmitter {
    fn submit(&self, submission: SaleSubmission) -> Result<Sale, SubmitError>;
}
