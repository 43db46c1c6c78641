//! # Draft Sale
//!
//! The in-progress sale one operator edits in one session, and its
//! transformation into a frozen submission payload.
//!
//! ## Line State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │   add_line            select_product          set_quantity          │
//! │  ────────────►  Empty ──────────────► ProductSelected ──────────►   │
//! │                   ▲                        │            Quantified  │
//! │                   │     clear_product      │                │       │
//! │                   └────────────────────────┘                │       │
//! │                                                             ▼       │
//! │   remove_line: any state ──► line absent        subtotal computable │
//! │                                                                     │
//! │   No transition after submission: finalize() freezes snapshots      │
//! │   and leaves the draft untouched for correct-and-retry.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Product Availability
//! Within one sale a product may back at most one line. The set of product
//! ids currently in use is derived from the lines after every mutation (a
//! set difference against the catalog, not per-option mutable flags), so a
//! product picked on one line is unselectable on every other line until
//! freed by `clear_product` or `remove_line`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::totals::SaleTotals;
use crate::types::{PaymentMethod, Product, SaleLine};
use crate::validation::{
    validate_line_count_limit, validate_product_name, validate_quantity_limit, validate_tendered,
    validate_unit_price, validate_uuid,
};
use crate::{MAX_LINE_QUANTITY, MAX_SALE_LINES};

// =============================================================================
// Product Snapshot
// =============================================================================

/// Frozen copy of the catalog data a line was built from.
///
/// The price is locked in when the product is selected; later catalog edits
/// do not move an in-progress sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
}

impl ProductSnapshot {
    fn from_product(product: &Product) -> Self {
        ProductSnapshot {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.unit_price_cents,
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Draft Line
// =============================================================================

/// One row of the sale-entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum DraftLine {
    /// Row added, nothing chosen yet.
    Empty,
    /// Product chosen, quantity not yet entered.
    ProductSelected { product: ProductSnapshot },
    /// Product and quantity present; the subtotal is computable.
    Quantified { product: ProductSnapshot, quantity: i64 },
}

impl DraftLine {
    /// The product bound to this line, if one has been selected.
    pub fn product(&self) -> Option<&ProductSnapshot> {
        match self {
            DraftLine::Empty => None,
            DraftLine::ProductSelected { product } => Some(product),
            DraftLine::Quantified { product, .. } => Some(product),
        }
    }

    /// The entered quantity, once the line is quantified.
    pub fn quantity(&self) -> Option<i64> {
        match self {
            DraftLine::Quantified { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    /// The line subtotal. `None` until the line reaches `Quantified`; an
    /// incomplete row displays no result.
    pub fn subtotal(&self) -> Option<Money> {
        match self {
            DraftLine::Quantified { product, quantity } => {
                Some(product.unit_price().multiply_quantity(*quantity))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Draft Limits
// =============================================================================

/// Bounds on a single draft, configurable from the register config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLimits {
    /// Maximum number of line rows.
    pub max_lines: usize,
    /// Maximum quantity on one line.
    pub max_quantity: i64,
}

impl Default for DraftLimits {
    fn default() -> Self {
        DraftLimits {
            max_lines: MAX_SALE_LINES,
            max_quantity: MAX_LINE_QUANTITY,
        }
    }
}

// =============================================================================
// Draft Sale
// =============================================================================

/// The sale being assembled by the operator.
///
/// ## Invariants
/// - At most one line per product id (duplicates rejected on selection and
///   re-checked at submission)
/// - Every stored amount has already passed validation; a rejected mutation
///   leaves the draft exactly as it was
/// - Totals are never stored here, only derived via [`DraftSale::totals`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftSale {
    lines: Vec<DraftLine>,
    tendered_cents: Option<i64>,
    customer_id: Option<String>,
    payment_method: Option<PaymentMethod>,
    #[serde(default)]
    limits: DraftLimits,
}

impl DraftSale {
    /// Creates an empty draft with default limits.
    pub fn new() -> Self {
        Self::with_limits(DraftLimits::default())
    }

    /// Creates an empty draft with the given limits.
    pub fn with_limits(limits: DraftLimits) -> Self {
        DraftSale {
            lines: Vec::new(),
            tendered_cents: None,
            customer_id: None,
            payment_method: None,
            limits,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The line rows in display order.
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Number of line rows (including incomplete ones).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the draft has no line rows at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The tendered amount, if the operator has entered one.
    pub fn tendered(&self) -> Option<Money> {
        self.tendered_cents.map(Money::from_cents)
    }

    /// The chosen payment method, if any.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    /// The customer the sale is being made to, if chosen.
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// One line's subtotal for row display, if computable.
    pub fn line_subtotal(&self, line: usize) -> Option<Money> {
        self.lines.get(line).and_then(DraftLine::subtotal)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends an empty line row. Returns its index.
    pub fn add_line(&mut self) -> CoreResult<usize> {
        validate_line_count_limit(self.lines.len(), self.limits.max_lines)?;
        self.lines.push(DraftLine::Empty);
        Ok(self.lines.len() - 1)
    }

    /// Binds a catalog product to a line, freezing name and price.
    ///
    /// A previously entered quantity survives a product change. Fails with
    /// `DuplicateLineItem` if another line already holds this product, and
    /// with `ProductInactive` for soft-deleted catalog entries.
    pub fn select_product(&mut self, line: usize, product: &Product) -> CoreResult<()> {
        if line >= self.lines.len() {
            return Err(CoreError::NoSuchLine { line });
        }
        if !product.is_active {
            return Err(CoreError::ProductInactive {
                product_id: product.id.clone(),
            });
        }
        // The name and price get frozen into the receipt snapshot, so a
        // broken catalog entry is rejected before it can bind to a line.
        validate_product_name(&product.name)?;
        validate_unit_price(product.unit_price())?;

        let in_use_elsewhere = self
            .lines
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != line)
            .filter_map(|(_, l)| l.product())
            .any(|p| p.product_id == product.id);
        if in_use_elsewhere {
            return Err(CoreError::DuplicateLineItem {
                product_id: product.id.clone(),
            });
        }

        let snapshot = ProductSnapshot::from_product(product);
        self.lines[line] = match &self.lines[line] {
            DraftLine::Quantified { quantity, .. } => DraftLine::Quantified {
                product: snapshot,
                quantity: *quantity,
            },
            _ => DraftLine::ProductSelected { product: snapshot },
        };
        Ok(())
    }

    /// Enters or changes a line's quantity, quantifying the line.
    ///
    /// The line must already have a product; quantity is validated against
    /// the draft's limits before anything is stored.
    pub fn set_quantity(&mut self, line: usize, quantity: i64) -> CoreResult<()> {
        if line >= self.lines.len() {
            return Err(CoreError::NoSuchLine { line });
        }
        validate_quantity_limit(quantity, self.limits.max_quantity)?;

        let product = match self.lines[line].product() {
            Some(p) => p.clone(),
            None => {
                return Err(CoreError::IncompleteLine {
                    line,
                    missing: "no product selected",
                })
            }
        };

        self.lines[line] = DraftLine::Quantified { product, quantity };
        Ok(())
    }

    /// Unbinds a line's product, freeing it for other lines. The row stays.
    pub fn clear_product(&mut self, line: usize) -> CoreResult<()> {
        if line >= self.lines.len() {
            return Err(CoreError::NoSuchLine { line });
        }
        self.lines[line] = DraftLine::Empty;
        Ok(())
    }

    /// Removes a line row entirely, freeing its product.
    pub fn remove_line(&mut self, line: usize) -> CoreResult<()> {
        if line >= self.lines.len() {
            return Err(CoreError::NoSuchLine { line });
        }
        self.lines.remove(line);
        Ok(())
    }

    /// Sets or clears the tendered amount.
    pub fn set_tendered(&mut self, tendered: Option<Money>) -> CoreResult<()> {
        validate_tendered(tendered)?;
        self.tendered_cents = tendered.map(|m| m.cents());
        Ok(())
    }

    /// Sets or clears the customer.
    pub fn set_customer(&mut self, customer_id: Option<String>) -> CoreResult<()> {
        if let Some(ref id) = customer_id {
            validate_uuid(id)?;
        }
        self.customer_id = customer_id;
        Ok(())
    }

    /// Sets or clears the payment method.
    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
    }

    /// Resets the draft to empty, keeping the configured limits.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.tendered_cents = None;
        self.customer_id = None;
        self.payment_method = None;
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Product ids currently bound to some line.
    ///
    /// Recomputed from the lines on every call; feeds the presentation rule
    /// that an already-chosen product is unselectable elsewhere.
    pub fn products_in_use(&self) -> HashSet<String> {
        self.lines
            .iter()
            .filter_map(DraftLine::product)
            .map(|p| p.product_id.clone())
            .collect()
    }

    /// Catalog entries still selectable: active and not bound to any line.
    pub fn available_products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        let in_use = self.products_in_use();
        catalog
            .iter()
            .filter(|p| p.is_active && !in_use.contains(&p.id))
            .collect()
    }

    /// Recomputes the full totals snapshot for the current draft.
    ///
    /// Incomplete lines contribute nothing; `line_subtotals` holds the
    /// subtotals of quantified lines in display order. Pure and idempotent:
    /// calling twice on an unchanged draft yields identical results.
    pub fn totals(&self) -> SaleTotals {
        let lines = self
            .lines
            .iter()
            .filter_map(|l| match l {
                DraftLine::Quantified { product, quantity } => {
                    Some((product.unit_price(), *quantity))
                }
                _ => None,
            })
            .collect::<Vec<_>>();

        // Stored amounts were validated on entry, so recomputation cannot
        // fail on an untouched draft.
        SaleTotals::compute(lines, self.tendered())
            .expect("draft holds only validated amounts")
    }

    // =========================================================================
    // Finalization
    // =========================================================================

    /// Validates the whole draft and produces the frozen submission payload.
    ///
    /// ## Rejections (whole sale, no partial submission)
    /// - `EmptySale` - no line rows
    /// - `IncompleteLine` - a row without product or quantity
    /// - `DuplicateLineItem` - two rows on one product (re-checked here)
    /// - `InvalidInput` - payment method missing
    ///
    /// The draft itself is not consumed or mutated; after a rejection the
    /// operator corrects the form and retries.
    pub fn finalize(&self) -> CoreResult<SaleSubmission> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptySale);
        }

        let mut seen = HashSet::new();
        let mut lines = Vec::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            let (product, quantity) = match line {
                DraftLine::Quantified { product, quantity } => (product, *quantity),
                DraftLine::ProductSelected { .. } => {
                    return Err(CoreError::IncompleteLine {
                        line: i,
                        missing: "no quantity entered",
                    })
                }
                DraftLine::Empty => {
                    return Err(CoreError::IncompleteLine {
                        line: i,
                        missing: "no product selected",
                    })
                }
            };

            if !seen.insert(product.product_id.clone()) {
                return Err(CoreError::DuplicateLineItem {
                    product_id: product.product_id.clone(),
                });
            }

            lines.push(SaleLine {
                product_id: product.product_id.clone(),
                name_snapshot: product.name.clone(),
                unit_price_cents: product.unit_price_cents,
                quantity,
                subtotal_cents: product.unit_price().multiply_quantity(quantity).cents(),
            });
        }

        let payment_method = self.payment_method.ok_or_else(|| {
            CoreError::InvalidInput(ValidationError::Required {
                field: "payment method".to_string(),
            })
        })?;

        let totals = self.totals();

        Ok(SaleSubmission {
            lines,
            customer_id: self.customer_id.clone(),
            payment_method,
            tendered_cents: self.tendered_cents,
            total_cents: totals.grand_total.cents(),
            change_cents: totals.change.cents(),
        })
    }
}

// =============================================================================
// Sale Submission
// =============================================================================

/// The frozen payload handed across the submission boundary.
///
/// Persistence and receipt-number assignment belong to the collaborator
/// that accepts this; nothing here changes once finalize() has produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleSubmission {
    /// Snapshot lines with per-line subtotals.
    pub lines: Vec<SaleLine>,
    pub customer_id: Option<String>,
    pub payment_method: PaymentMethod,
    pub tendered_cents: Option<i64>,
    /// Grand total at submission time.
    pub total_cents: i64,
    /// Change owed at submission time (0 when tender absent or short).
    pub change_cents: i64,
}

impl SaleSubmission {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, unit_price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: None,
            unit_price_cents,
            is_active: true,
        }
    }

    fn quantified_draft(entries: &[(&str, i64, i64)]) -> DraftSale {
        let mut draft = DraftSale::new();
        for &(id, price, qty) in entries {
            let line = draft.add_line().unwrap();
            draft.select_product(line, &product(id, price)).unwrap();
            draft.set_quantity(line, qty).unwrap();
        }
        draft
    }

    #[test]
    fn test_line_transitions() {
        let mut draft = DraftSale::new();
        let line = draft.add_line().unwrap();
        assert_eq!(draft.lines()[line], DraftLine::Empty);
        assert_eq!(draft.line_subtotal(line), None);

        draft.select_product(line, &product("1", 1000)).unwrap();
        assert!(matches!(
            draft.lines()[line],
            DraftLine::ProductSelected { .. }
        ));
        assert_eq!(draft.line_subtotal(line), None); // not yet computable

        draft.set_quantity(line, 2).unwrap();
        assert_eq!(draft.line_subtotal(line), Some(Money::from_cents(2000)));

        draft.clear_product(line).unwrap();
        assert_eq!(draft.lines()[line], DraftLine::Empty);

        draft.remove_line(line).unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_quantity_requires_product() {
        let mut draft = DraftSale::new();
        let line = draft.add_line().unwrap();
        assert!(matches!(
            draft.set_quantity(line, 2),
            Err(CoreError::IncompleteLine { .. })
        ));
    }

    #[test]
    fn test_quantity_survives_product_change() {
        let mut draft = DraftSale::new();
        let line = draft.add_line().unwrap();
        draft.select_product(line, &product("1", 1000)).unwrap();
        draft.set_quantity(line, 4).unwrap();

        draft.select_product(line, &product("2", 250)).unwrap();
        assert_eq!(draft.lines()[line].quantity(), Some(4));
        assert_eq!(draft.line_subtotal(line), Some(Money::from_cents(1000)));
    }

    #[test]
    fn test_duplicate_product_rejected_on_select() {
        let mut draft = DraftSale::new();
        let first = draft.add_line().unwrap();
        draft.select_product(first, &product("7", 1000)).unwrap();

        let second = draft.add_line().unwrap();
        let err = draft.select_product(second, &product("7", 1000));
        assert!(matches!(
            err,
            Err(CoreError::DuplicateLineItem { ref product_id }) if product_id == "7"
        ));

        // Reselecting the same product on its own line is not a duplicate.
        draft.select_product(first, &product("7", 1000)).unwrap();
    }

    #[test]
    fn test_product_freed_on_clear_and_remove() {
        let mut draft = DraftSale::new();
        let first = draft.add_line().unwrap();
        draft.select_product(first, &product("7", 1000)).unwrap();
        let second = draft.add_line().unwrap();

        draft.clear_product(first).unwrap();
        draft.select_product(second, &product("7", 1000)).unwrap();
        assert_eq!(draft.products_in_use().len(), 1);

        draft.remove_line(second).unwrap();
        assert!(draft.products_in_use().is_empty());
    }

    #[test]
    fn test_inactive_product_rejected() {
        let mut draft = DraftSale::new();
        let line = draft.add_line().unwrap();
        let mut discontinued = product("9", 500);
        discontinued.is_active = false;
        assert!(matches!(
            draft.select_product(line, &discontinued),
            Err(CoreError::ProductInactive { .. })
        ));
    }

    #[test]
    fn test_available_products_is_set_difference() {
        let catalog = vec![product("1", 100), product("2", 200), product("3", 300)];
        let mut inactive = product("4", 400);
        inactive.is_active = false;
        let mut full_catalog = catalog.clone();
        full_catalog.push(inactive);

        let mut draft = DraftSale::new();
        let line = draft.add_line().unwrap();
        draft.select_product(line, &catalog[1]).unwrap();

        let available = draft.available_products(&full_catalog);
        let ids: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_totals_skip_incomplete_lines() {
        let mut draft = quantified_draft(&[("1", 1000, 2)]);
        let pending = draft.add_line().unwrap();
        draft.select_product(pending, &product("2", 550)).unwrap();
        // pending line has no quantity yet

        let totals = draft.totals();
        assert_eq!(totals.line_subtotals, vec![Money::from_cents(2000)]);
        assert_eq!(totals.grand_total, Money::from_cents(2000));
    }

    #[test]
    fn test_totals_with_tender() {
        let mut draft = quantified_draft(&[("1", 1000, 2), ("2", 550, 3)]);
        draft.set_tendered(Some(Money::from_cents(4000))).unwrap();

        let totals = draft.totals();
        assert_eq!(totals.grand_total, Money::from_cents(3650));
        assert_eq!(totals.change, Money::from_cents(350));
        assert_eq!(totals.shortfall, Money::zero());
    }

    #[test]
    fn test_negative_tender_rejected_and_draft_unchanged() {
        let mut draft = quantified_draft(&[("1", 1000, 2)]);
        draft.set_tendered(Some(Money::from_cents(3000))).unwrap();

        assert!(draft.set_tendered(Some(Money::from_cents(-1))).is_err());
        assert_eq!(draft.tendered(), Some(Money::from_cents(3000)));
    }

    #[test]
    fn test_finalize_empty_sale() {
        let draft = DraftSale::new();
        assert!(matches!(draft.finalize(), Err(CoreError::EmptySale)));
    }

    #[test]
    fn test_finalize_incomplete_line() {
        let mut draft = quantified_draft(&[("1", 1000, 2)]);
        draft.set_payment_method(Some(PaymentMethod::Cash));
        draft.add_line().unwrap();

        assert!(matches!(
            draft.finalize(),
            Err(CoreError::IncompleteLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_finalize_requires_payment_method() {
        let draft = quantified_draft(&[("1", 1000, 2)]);
        assert!(matches!(
            draft.finalize(),
            Err(CoreError::InvalidInput(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_finalize_freezes_snapshot() {
        let mut draft = quantified_draft(&[("1", 1000, 2), ("2", 550, 3)]);
        draft.set_payment_method(Some(PaymentMethod::Cash));
        draft.set_tendered(Some(Money::from_cents(4000))).unwrap();

        let submission = draft.finalize().unwrap();
        assert_eq!(submission.lines.len(), 2);
        assert_eq!(submission.lines[0].subtotal_cents, 2000);
        assert_eq!(submission.lines[1].subtotal_cents, 1650);
        assert_eq!(submission.total_cents, 3650);
        assert_eq!(submission.change_cents, 350);
        assert_eq!(submission.payment_method, PaymentMethod::Cash);

        // Finalize leaves the draft intact for correct-and-retry.
        assert_eq!(draft.line_count(), 2);
    }

    #[test]
    fn test_finalize_no_tender_records_zero_change() {
        let mut draft = quantified_draft(&[("1", 1000, 2)]);
        draft.set_payment_method(Some(PaymentMethod::BankTransfer));

        let submission = draft.finalize().unwrap();
        assert_eq!(submission.tendered_cents, None);
        assert_eq!(submission.change_cents, 0);
    }

    #[test]
    fn test_line_limit() {
        let mut draft = DraftSale::with_limits(DraftLimits {
            max_lines: 2,
            max_quantity: 10,
        });
        draft.add_line().unwrap();
        draft.add_line().unwrap();
        assert!(draft.add_line().is_err());

        let line = 0;
        draft.select_product(line, &product("1", 100)).unwrap();
        assert!(draft.set_quantity(line, 11).is_err());
        assert!(draft.set_quantity(line, 10).is_ok());
    }

    #[test]
    fn test_raised_quantity_limit_flows_through_totals() {
        let mut draft = DraftSale::with_limits(DraftLimits {
            max_lines: MAX_SALE_LINES,
            max_quantity: 2000,
        });
        let line = draft.add_line().unwrap();
        draft.select_product(line, &product("1", 100)).unwrap();
        draft.set_quantity(line, 1500).unwrap();

        let totals = draft.totals();
        assert_eq!(totals.grand_total, Money::from_cents(150_000));

        draft.set_payment_method(Some(PaymentMethod::Cash));
        let submission = draft.finalize().unwrap();
        assert_eq!(submission.total_cents, 150_000);
    }

    #[test]
    fn test_product_with_blank_name_rejected() {
        let mut draft = DraftSale::new();
        let line = draft.add_line().unwrap();
        let mut unnamed = product("5", 500);
        unnamed.name = "   ".to_string();
        assert!(matches!(
            draft.select_product(line, &unnamed),
            Err(CoreError::InvalidInput(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_customer_id_must_be_uuid() {
        let mut draft = DraftSale::new();
        assert!(draft.set_customer(Some("c1".to_string())).is_err());
        assert!(draft
            .set_customer(Some("550e8400-e29b-41d4-a716-446655440000".to_string()))
            .is_ok());
        assert!(draft.set_customer(None).is_ok());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut draft = quantified_draft(&[("1", 1000, 2)]);
        draft.set_payment_method(Some(PaymentMethod::Cash));
        draft
            .set_customer(Some("550e8400-e29b-41d4-a716-446655440000".to_string()))
            .unwrap();
        draft.set_tendered(Some(Money::from_cents(5000))).unwrap();

        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.tendered(), None);
        assert_eq!(draft.payment_method(), None);
        assert_eq!(draft.customer_id(), None);
        assert_eq!(draft.totals(), SaleTotals::empty());
    }
}
