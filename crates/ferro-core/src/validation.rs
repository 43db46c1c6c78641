//! # Validation Module
//!
//! Field-level input validation for sale entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation (form controls)                              │
//! │  ├── Basic format checks, immediate operator feedback               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── Runs before every recompute; a failed field yields no result   │
//! │  │   for the offending row and leaves the draft untouched           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Submission collaborator (persistence constraints)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1
///
/// There is no upper bound here: subtotals are defined for any positive
/// quantity. The entry cap is a per-draft setting, enforced by
/// [`validate_quantity_limit`] when the operator types the value in.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBeAtLeastOne {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity against a draft's configured maximum.
///
/// Drafts carry their own entry cap (register config), which defaults to
/// MAX_LINE_QUANTITY.
pub fn validate_quantity_limit(qty: i64, max: i64) -> ValidationResult<()> {
    validate_quantity(qty)?;

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates a unit price (or any non-negative amount).
///
/// ## Rules
/// - Must be zero or greater; zero is allowed (free items)
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional tendered amount.
///
/// ## Rules
/// - Absent is fine (tender not entered yet)
/// - If present, must be zero or greater
pub fn validate_tendered(tendered: Option<Money>) -> ValidationResult<()> {
    if let Some(amount) = tendered {
        if amount.is_negative() {
            return Err(ValidationError::MustNotBeNegative {
                field: "tendered amount".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a derived sale total.
///
/// ## Rules
/// - Must be zero or greater (a sum of non-negative subtotals)
pub fn validate_total(total: Money) -> ValidationResult<()> {
    if total.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "total".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name for display and receipt snapshots.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// Catalog, customer and sale ids are UUID v4 strings; references crossing
/// the submission boundary are checked here first.
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a draft can take another line, against its configured
/// maximum.
pub fn validate_line_count_limit(current_lines: usize, max: usize) -> ValidationResult<()> {
    if current_lines >= max {
        return Err(ValidationError::OutOfRange {
            field: "line items".to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(100_000).is_ok()); // no cap outside a draft

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_quantity_limit() {
        assert!(validate_quantity_limit(10, 10).is_ok());
        assert!(validate_quantity_limit(11, 10).is_err());
        assert!(validate_quantity_limit(0, 10).is_err());
        assert!(validate_quantity_limit(1500, 2000).is_ok());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_cents(0)).is_ok());
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_tendered() {
        assert!(validate_tendered(None).is_ok());
        assert!(validate_tendered(Some(Money::from_cents(0))).is_ok());
        assert!(validate_tendered(Some(Money::from_cents(4000))).is_ok());
        assert!(validate_tendered(Some(Money::from_cents(-1))).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Galvanized nail 2\"").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }

    #[test]
    fn test_validate_total() {
        assert!(validate_total(Money::zero()).is_ok());
        assert!(validate_total(Money::from_cents(3650)).is_ok());

        let err = validate_total(Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.to_string(), "total must not be negative");
    }

    #[test]
    fn test_validate_line_count_limit() {
        assert!(validate_line_count_limit(0, 100).is_ok());
        assert!(validate_line_count_limit(99, 100).is_ok());
        assert!(validate_line_count_limit(100, 100).is_err());
    }
}
