//! # Sale Total Calculator
//!
//! Deterministic derivation of per-line subtotals, the grand total and the
//! settlement (change vs. shortfall) from a set of line items and a tendered
//! payment amount.
//!
//! ## Two Call Sites, One Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │  Sale entry (preview)          Sale detail (recorded)               │
//! │  ────────────────────          ──────────────────────               │
//! │  DraftSale::totals()           Sale::recomputed_total()             │
//! │        │                              │                             │
//! │        └─────────────┬────────────────┘                             │
//! │                      ▼                                              │
//! │            compute_subtotal / compute_grand_total                   │
//! │                   compute_settlement                                │
//! │                                                                     │
//! │  Both sides run the same pure functions, so the interactive         │
//! │  preview and the read-only record can never disagree.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reconciliation Invariant
//! The grand total is the sum of per-line subtotals, each already exact at
//! 2 decimals (integer cents). Every displayed total therefore equals the
//! sum of the displayed rows, which `Sale::is_reconciled` relies on.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_quantity, validate_tendered, validate_total, validate_unit_price};

// =============================================================================
// Subtotal & Grand Total
// =============================================================================

/// Computes one line's subtotal: `unit_price × quantity`.
///
/// Rejects `unit_price < 0` and `quantity < 1` with `InvalidInput` before
/// computing. Defined for every positive quantity; the per-draft entry cap
/// is checked where the operator types the value in, not here. Pure; no
/// side effects.
pub fn compute_subtotal(unit_price: Money, quantity: i64) -> CoreResult<Money> {
    validate_unit_price(unit_price)?;
    validate_quantity(quantity)?;
    Ok(unit_price.multiply_quantity(quantity))
}

/// Computes the grand total of a sequence of `(unit_price, quantity)` lines.
///
/// Defined as the sum of the per-line subtotals, each validated and derived
/// by [`compute_subtotal`]. An empty sequence totals `$0.00`.
pub fn compute_grand_total<I>(lines: I) -> CoreResult<Money>
where
    I: IntoIterator<Item = (Money, i64)>,
{
    let mut total = Money::zero();
    for (unit_price, quantity) in lines {
        total += compute_subtotal(unit_price, quantity)?;
    }
    Ok(total)
}

// =============================================================================
// Settlement
// =============================================================================

/// The signed settlement of a sale, split into two non-negative figures.
///
/// ## Invariant
/// At most one of `change` / `shortfall` is nonzero. Both are zero exactly
/// when the tendered amount equals the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Amount owed back to the customer (tender exceeded the total).
    pub change: Money,
    /// Amount still owed by the customer (tender short of the total, or no
    /// tender entered yet, in which case the full total is due).
    pub shortfall: Money,
}

impl Settlement {
    /// A settled sale: nothing owed either way.
    pub const fn settled() -> Self {
        Settlement {
            change: Money::zero(),
            shortfall: Money::zero(),
        }
    }

    /// True when the customer owes nothing further.
    #[inline]
    pub fn is_paid(&self) -> bool {
        self.shortfall.is_zero()
    }
}

/// Computes change and shortfall from the grand total and the tender.
///
/// ## Policy
/// - tender absent       → change 0.00, shortfall = grand_total
/// - tender ≥ grand_total → change = tender − grand_total, shortfall 0.00
/// - tender < grand_total → shortfall = grand_total − tender, change 0.00
///
/// A negative tendered amount is rejected with `InvalidInput`.
pub fn compute_settlement(grand_total: Money, tendered: Option<Money>) -> CoreResult<Settlement> {
    validate_total(grand_total)?;
    validate_tendered(tendered)?;

    let settlement = match tendered {
        None => Settlement {
            change: Money::zero(),
            shortfall: grand_total,
        },
        Some(tender) if tender >= grand_total => Settlement {
            change: tender - grand_total,
            shortfall: Money::zero(),
        },
        Some(tender) => Settlement {
            change: Money::zero(),
            shortfall: grand_total - tender,
        },
    };

    debug_assert!(settlement.change.is_zero() || settlement.shortfall.is_zero());
    Ok(settlement)
}

// =============================================================================
// Sale Totals Snapshot
// =============================================================================

/// The full derived-totals snapshot for a sale in progress or on record.
///
/// Recomputed on demand after every edit; never stored as authority. Each
/// recompute fully replaces the prior displayed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTotals {
    /// One subtotal per line, in display order.
    pub line_subtotals: Vec<Money>,
    /// Sum of the line subtotals.
    pub grand_total: Money,
    /// Change owed to the customer.
    pub change: Money,
    /// Amount still owed by the customer.
    pub shortfall: Money,
}

impl SaleTotals {
    /// Totals of a sale with no lines and no tender.
    pub fn empty() -> Self {
        SaleTotals {
            line_subtotals: Vec::new(),
            grand_total: Money::zero(),
            change: Money::zero(),
            shortfall: Money::zero(),
        }
    }

    /// Derives the complete snapshot from `(unit_price, quantity)` lines and
    /// an optional tendered amount.
    pub fn compute<I>(lines: I, tendered: Option<Money>) -> CoreResult<SaleTotals>
    where
        I: IntoIterator<Item = (Money, i64)>,
    {
        let mut line_subtotals = Vec::new();
        for (unit_price, quantity) in lines {
            line_subtotals.push(compute_subtotal(unit_price, quantity)?);
        }

        let grand_total = line_subtotals
            .iter()
            .fold(Money::zero(), |acc, &m| acc + m);
        let settlement = compute_settlement(grand_total, tendered)?;

        Ok(SaleTotals {
            line_subtotals,
            grand_total,
            change: settlement.change,
            shortfall: settlement.shortfall,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
