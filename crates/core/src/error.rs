//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// stock availability, missing records). Storage concerns belong elsewhere.
/// Every variant is recoverable: no write happens before validation passes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (missing required field, bad number, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A withdrawal asked for more than the item currently holds.
    #[error("insufficient stock for item {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: String,
        available: f64,
        requested: f64,
    },

    /// A movement referenced a stock item that does not exist.
    #[error("inventory item not found: {0}")]
    ItemNotFound(String),

    /// Any other record (order, employee, customer) was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_stock(item_id: impl Into<String>, available: f64, requested: f64) -> Self {
        Self::InsufficientStock {
            item_id: item_id.into(),
            available,
            requested,
        }
    }

    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound(id.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Amount available when this is an insufficient-stock rejection.
    pub fn available(&self) -> Option<f64> {
        match self {
            Self::InsufficientStock { available, .. } => Some(*available),
            _ => None,
        }
    }
}

/// Reject empty / whitespace-only required text fields.
pub fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject NaN and infinities.
pub fn require_finite(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a finite number")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_carries_available_amount() {
        let err = DomainError::insufficient_stock("INV-1", 10.0, 15.0);
        assert_eq!(err.available(), Some(10.0));
        assert_eq!(
            err.to_string(),
            "insufficient stock for item INV-1: requested 15, available 10"
        );
    }

    #[test]
    fn required_text_rejects_blank() {
        assert!(require_text("name", "  ").is_err());
        assert!(require_text("name", "Bolts").is_ok());
    }

    #[test]
    fn finite_rejects_nan() {
        assert!(require_finite("quantity", f64::NAN).is_err());
        assert!(require_finite("quantity", f64::INFINITY).is_err());
        assert!(require_finite("quantity", 0.0).is_ok());
    }
}
