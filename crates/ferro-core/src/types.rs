//! # Domain Types
//!
//! Core domain types for a hardware store's sales.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐         │
//! │  │   Product    │   │   Customer   │   │      Sale        │         │
//! │  │  ──────────  │   │  ──────────  │   │  ──────────────  │         │
//! │  │  id (UUID)   │   │  id (UUID)   │   │  id (UUID)       │         │
//! │  │  name        │   │  first/last  │   │  receipt_number  │         │
//! │  │  unit_price  │   │  document    │   │  status          │         │
//! │  │  is_active   │   │  phone/email │   │  lines, totals   │         │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘         │
//! │                                                                     │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐         │
//! │  │  SaleStatus  │   │PaymentMethod │   │    SaleLine      │         │
//! │  │  ──────────  │   │  ──────────  │   │  ──────────────  │         │
//! │  │  Completed   │   │  Cash        │   │  price snapshot  │         │
//! │  │  Annulled    │   │  CreditCard  │   │  quantity        │         │
//! │  └──────────────┘   │  DebitCard   │   │  subtotal        │         │
//! │                     │  BankTransfer│   └──────────────────┘         │
//! │                     └──────────────┘                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Entities carry an immutable UUID for relations plus a human-readable
//! business id where one exists (the sale's receipt number, assigned by the
//! submission collaborator).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product available for sale.
///
/// The catalog is owned by an external collaborator; this crate reads it and
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the operator and on the receipt.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Unit price in cents (smallest currency unit).
    pub unit_price_cents: i64,

    /// Whether the product can currently be sold (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub first_name: String,
    pub last_name: String,

    /// Identity document number.
    pub document: String,

    pub phone: String,
    pub email: Option<String>,
}

impl Customer {
    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays for a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment. The only method with tender/change handling.
    Cash,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Bank transfer.
    BankTransfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::DebitCard => write!(f, "debit_card"),
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" | "credit" => Ok(PaymentMethod::CreditCard),
            "debit_card" | "debit" => Ok(PaymentMethod::DebitCard),
            "bank_transfer" | "transfer" => Ok(PaymentMethod::BankTransfer),
            other => Err(ValidationError::InvalidFormat {
                field: "payment method".to_string(),
                reason: format!(
                    "unknown method '{}'. Valid: cash, credit_card, debit_card, bank_transfer",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a finalized sale.
///
/// A draft in progress lives in `DraftSale`; once submitted the record is
/// immutable except for annulment, which is a status flag only and never a
/// recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Sale has been submitted and recorded.
    Completed,
    /// Sale was annulled after the fact.
    Annulled,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Completed
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// A line item in a finalized sale.
///
/// Uses the snapshot pattern: name and unit price are frozen at submission
/// so the record keeps displaying consistent data even if the catalog
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    /// Product this line was sold against.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name_snapshot: String,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Quantity sold, always >= 1.
    pub quantity: i64,

    /// Stored line subtotal (unit_price × quantity) in cents.
    pub subtotal_cents: i64,
}

impl SaleLine {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the stored subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Re-derives the subtotal from its inputs.
    ///
    /// The stored value is display cache, never authority: a subtotal is a
    /// derived value and must be recomputable from price and quantity at any
    /// time.
    #[inline]
    pub fn recomputed_subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A finalized, immutable sale record.
///
/// Produced by the submission collaborator from a `SaleSubmission`; this
/// crate only re-derives its totals for display consistency checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable receipt number, assigned by the collaborator.
    pub receipt_number: String,

    /// Customer the sale was made to, if recorded.
    pub customer_id: Option<String>,

    /// Payment method used.
    pub payment_method: PaymentMethod,

    pub status: SaleStatus,

    /// Line items with frozen snapshots.
    pub lines: Vec<SaleLine>,

    /// Stored grand total in cents.
    pub total_cents: i64,

    /// Cash amount the customer handed over, if entered.
    pub tendered_cents: Option<i64>,

    /// Change returned to the customer.
    pub change_cents: i64,

    /// When the sale was recorded.
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the stored grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Re-derives the grand total by summing per-line recomputed subtotals.
    ///
    /// Summing the per-line values (not raw products rounded once) keeps the
    /// re-derived total reconcilable against the displayed rows.
    pub fn recomputed_total(&self) -> Money {
        self.lines
            .iter()
            .map(SaleLine::recomputed_subtotal)
            .fold(Money::zero(), |acc, m| acc + m)
    }

    /// Checks the stored figures against a fresh recomputation.
    ///
    /// True iff every stored line subtotal and the stored grand total match
    /// their re-derived values. Detail views run this to flag drifted
    /// records instead of silently trusting them.
    pub fn is_reconciled(&self) -> bool {
        self.lines
            .iter()
            .all(|l| l.subtotal() == l.recomputed_subtotal())
            && self.total() == self.recomputed_total()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, unit_price_cents: i64, quantity: i64) -> SaleLine {
        SaleLine {
            product_id: product_id.to_string(),
            name_snapshot: format!("Product {}", product_id),
            unit_price_cents,
            quantity,
            subtotal_cents: unit_price_cents * quantity,
        }
    }

    fn sale(lines: Vec<SaleLine>, total_cents: i64) -> Sale {
        Sale {
            id: "a2f1c9d4-0000-4000-8000-000000000001".to_string(),
            receipt_number: "4821937465012".to_string(),
            customer_id: None,
            payment_method: PaymentMethod::Cash,
            status: SaleStatus::Completed,
            lines,
            total_cents,
            tendered_cents: None,
            change_cents: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_payment_method_roundtrip() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(
            "credit".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert!("voucher".parse::<PaymentMethod>().is_err());

        assert_eq!(PaymentMethod::DebitCard.to_string(), "debit_card");
    }

    #[test]
    fn test_customer_full_name() {
        let customer = Customer {
            id: "c".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Suárez".to_string(),
            document: "30111222".to_string(),
            phone: "555-0101".to_string(),
            email: None,
        };
        assert_eq!(customer.full_name(), "Ana Suárez");
    }

    #[test]
    fn test_sale_reconciled() {
        let s = sale(vec![line("1", 1000, 2), line("2", 550, 3)], 3650);
        assert_eq!(s.recomputed_total().cents(), 3650);
        assert!(s.is_reconciled());
    }

    #[test]
    fn test_sale_detects_drifted_total() {
        let s = sale(vec![line("1", 1000, 2)], 1999);
        assert!(!s.is_reconciled());
    }

    #[test]
    fn test_sale_detects_drifted_line_subtotal() {
        let mut drifted = line("1", 1000, 2);
        drifted.subtotal_cents = 2100; // stored value no longer matches inputs
        let s = sale(vec![drifted], 2100);
        assert!(!s.is_reconciled());
    }

    #[test]
    fn test_status_default_is_completed() {
        assert_eq!(SaleStatus::default(), SaleStatus::Completed);
    }
}
