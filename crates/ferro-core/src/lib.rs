//! # ferro-core: Pure Business Logic for Ferro POS
//!
//! The heart of a hardware store's sale entry: all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Ferro POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │            Presentation (forms, lists, detail views)          │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                  ferro-register (session layer)               │  │
//! │  │     RegisterSession, SaleSubmitter boundary, config           │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                ★ ferro-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │  │
//! │  │  │  types  │ │  money  │ │ totals  │ │  draft  │ │validation│ │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Sale, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`totals`] - The Sale Total Calculator: subtotals, grand total,
//!   change/shortfall settlement
//! - [`draft`] - The draft-sale state machine and submission payload
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every recompute is deterministic and idempotent -
//!    same draft, same totals
//! 2. **No I/O**: persistence, routing and rendering live in collaborators
//! 3. **Fixed-Point Money**: all monetary values are cents (i64); a
//!    2-decimal price times an integer quantity is exact, so displayed
//!    totals always reconcile with displayed rows
//! 4. **Explicit Errors**: typed, locally recoverable, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ferro_core::money::Money;
//! use ferro_core::totals::{compute_grand_total, compute_settlement};
//!
//! let lines = vec![
//!     (Money::from_cents(1000), 2), // $10.00 × 2
//!     (Money::from_cents(550), 3),  // $5.50 × 3
//! ];
//! let total = compute_grand_total(lines).unwrap();
//! assert_eq!(total.cents(), 3650);
//!
//! let settlement = compute_settlement(total, Some(Money::from_cents(4000))).unwrap();
//! assert_eq!(settlement.change.cents(), 350);
//! assert!(settlement.shortfall.is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ferro_core::Money` instead of
// `use ferro_core::money::Money`

pub use draft::{DraftLimits, DraftLine, DraftSale, ProductSnapshot, SaleSubmission};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::{SaleTotals, Settlement};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line rows in a single sale.
///
/// ## Business Reason
/// Prevents runaway drafts and keeps one sale a reasonable size.
/// Configurable per register via `DraftLimits`.
pub const MAX_SALE_LINES: usize = 100;

/// Maximum quantity on a single line.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g. typing 1000 instead of 10).
/// Configurable per register via `DraftLimits`.
pub const MAX_LINE_QUANTITY: i64 = 999;
