//! # Register Session
//!
//! One operator, one in-progress sale, totals recomputed after every edit.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. The host application may call in from multiple handler threads
//! 2. Only one caller should modify the draft at a time
//! 3. Each recompute must see a consistent draft
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                               │
//! │                                                                     │
//! │  Operator Action         Session Call          Returned             │
//! │  ───────────────         ────────────          ────────             │
//! │  Add row ───────────────► add_line()           row index            │
//! │  Pick product ──────────► select_product()  ─┐                      │
//! │  Change quantity ───────► set_quantity()     ├─► fresh SaleTotals   │
//! │  Enter tender ──────────► set_tendered()     │                      │
//! │  Remove row ────────────► remove_line()     ─┘                      │
//! │  Submit ────────────────► checkout()           recorded Sale        │
//! │                                                                     │
//! │  Every successful mutation ends in one synchronous recompute that   │
//! │  fully replaces the prior displayed result. A rejected mutation     │
//! │  changes nothing and returns no new totals for the offending row.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use uuid::Uuid;

use ferro_core::{
    DraftSale, Money, PaymentMethod, Product, Sale, SaleTotals,
};

use crate::config::RegisterConfig;
use crate::error::RegisterResult;
use crate::submit::SaleSubmitter;

/// A sale-entry session at one register.
pub struct RegisterSession {
    /// Session identifier carried on every log line.
    session_id: String,
    draft: Arc<Mutex<DraftSale>>,
}

impl RegisterSession {
    /// Opens a session with an empty draft bounded by the register config.
    pub fn new(config: &RegisterConfig) -> Self {
        let session_id = Uuid::new_v4().to_string();
        debug!(session = %session_id, store = %config.store.name, "Register session opened");
        RegisterSession {
            session_id,
            draft: Arc::new(Mutex::new(DraftSale::with_limits(config.limits()))),
        }
    }

    /// The session identifier.
    pub fn id(&self) -> &str {
        &self.session_id
    }

    // =========================================================================
    // Draft Access
    // =========================================================================

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DraftSale) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DraftSale) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }

    // =========================================================================
    // Mutations (each returns the freshly recomputed totals)
    // =========================================================================

    /// Adds an empty line row; returns its index.
    pub fn add_line(&self) -> RegisterResult<usize> {
        let line = self.with_draft_mut(|d| d.add_line())?;
        debug!(session = %self.session_id, line, "Line added");
        Ok(line)
    }

    /// Binds a product to a line and recomputes.
    pub fn select_product(&self, line: usize, product: &Product) -> RegisterResult<SaleTotals> {
        let totals = self.with_draft_mut(|d| {
            d.select_product(line, product)?;
            Ok::<_, ferro_core::CoreError>(d.totals())
        })?;
        debug!(
            session = %self.session_id,
            line,
            product = %product.id,
            total = %totals.grand_total,
            "Product selected"
        );
        Ok(totals)
    }

    /// Sets a line's quantity and recomputes.
    pub fn set_quantity(&self, line: usize, quantity: i64) -> RegisterResult<SaleTotals> {
        let totals = self.with_draft_mut(|d| {
            d.set_quantity(line, quantity)?;
            Ok::<_, ferro_core::CoreError>(d.totals())
        })?;
        debug!(
            session = %self.session_id,
            line,
            quantity,
            total = %totals.grand_total,
            "Quantity set"
        );
        Ok(totals)
    }

    /// Frees a line's product (the row stays) and recomputes.
    pub fn clear_product(&self, line: usize) -> RegisterResult<SaleTotals> {
        let totals = self.with_draft_mut(|d| {
            d.clear_product(line)?;
            Ok::<_, ferro_core::CoreError>(d.totals())
        })?;
        debug!(session = %self.session_id, line, "Product cleared");
        Ok(totals)
    }

    /// Removes a line row and recomputes.
    pub fn remove_line(&self, line: usize) -> RegisterResult<SaleTotals> {
        let totals = self.with_draft_mut(|d| {
            d.remove_line(line)?;
            Ok::<_, ferro_core::CoreError>(d.totals())
        })?;
        debug!(session = %self.session_id, line, total = %totals.grand_total, "Line removed");
        Ok(totals)
    }

    /// Sets or clears the tendered amount and recomputes.
    pub fn set_tendered(&self, tendered: Option<Money>) -> RegisterResult<SaleTotals> {
        let totals = self.with_draft_mut(|d| {
            d.set_tendered(tendered)?;
            Ok::<_, ferro_core::CoreError>(d.totals())
        })?;
        debug!(
            session = %self.session_id,
            change = %totals.change,
            shortfall = %totals.shortfall,
            "Tender updated"
        );
        Ok(totals)
    }

    /// Sets or clears the customer.
    pub fn set_customer(&self, customer_id: Option<String>) -> RegisterResult<()> {
        self.with_draft_mut(|d| d.set_customer(customer_id))?;
        Ok(())
    }

    /// Sets or clears the payment method.
    pub fn set_payment_method(&self, method: Option<PaymentMethod>) {
        self.with_draft_mut(|d| d.set_payment_method(method));
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current totals snapshot without mutating anything.
    pub fn totals(&self) -> SaleTotals {
        self.with_draft(|d| d.totals())
    }

    /// Product ids bound to some line right now.
    pub fn products_in_use(&self) -> HashSet<String> {
        self.with_draft(|d| d.products_in_use())
    }

    /// Catalog entries still selectable on this draft.
    pub fn available_products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        let in_use = self.products_in_use();
        catalog
            .iter()
            .filter(|p| p.is_active && !in_use.contains(&p.id))
            .collect()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Finalizes the draft and hands it across the submission boundary.
    ///
    /// The draft is cleared only after the collaborator accepts; any
    /// rejection (local validation or remote) leaves it untouched so the
    /// operator can correct and retry.
    pub fn checkout(&self, submitter: &dyn SaleSubmitter) -> RegisterResult<Sale> {
        let submission = self.with_draft(|d| d.finalize()).map_err(|e| {
            warn!(session = %self.session_id, error = %e, "Checkout rejected locally");
            e
        })?;

        debug!(
            session = %self.session_id,
            payload = %serde_json::to_string(&submission).unwrap_or_default(),
            "Submitting sale"
        );

        let sale = submitter.submit(submission).map_err(|e| {
            warn!(session = %self.session_id, error = %e, "Submission failed");
            e
        })?;

        self.with_draft_mut(|d| d.clear());
        info!(
            session = %self.session_id,
            sale = %sale.id,
            receipt = %sale.receipt_number,
            total = %sale.total(),
            "Sale recorded"
        );
        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
