use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, Entity, require_finite, require_text};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Record-only marker written when an item is created.
    Initial,
    Addition,
    Withdrawal,
    /// Absolute set: the movement quantity becomes the item quantity.
    Adjustment,
}

impl MovementType {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementType::Initial => "initial",
            MovementType::Addition => "addition",
            MovementType::Withdrawal => "withdrawal",
            MovementType::Adjustment => "adjustment",
        }
    }

    /// Quantity an item holds after a movement of this type is applied.
    pub fn apply(self, current: f64, quantity: f64) -> f64 {
        match self {
            MovementType::Initial => current,
            MovementType::Addition => current + quantity,
            MovementType::Withdrawal => current - quantity,
            MovementType::Adjustment => quantity,
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for MovementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial" => Ok(MovementType::Initial),
            "addition" => Ok(MovementType::Addition),
            "withdrawal" => Ok(MovementType::Withdrawal),
            "adjustment" => Ok(MovementType::Adjustment),
            other => Err(DomainError::validation(format!("unknown movement type: {other}"))),
        }
    }
}

/// One entry of the append-only movement log.
///
/// `item_name` is a snapshot taken when the movement was recorded; it is
/// not updated if the item is renamed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub item_id: String,
    pub item_name: String,
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub quantity: f64,
    /// User-supplied effective date.
    #[serde(with = "crate::serde_helpers::calendar_date")]
    pub date: NaiveDate,
    /// System-assigned creation time.
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Entity for StockMovement {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for recording a movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub item_id: String,
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub quantity: f64,
    #[serde(with = "crate::serde_helpers::calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewMovement {
    pub fn new(item_id: impl Into<String>, kind: MovementType, quantity: f64, date: NaiveDate) -> Self {
        Self {
            item_id: item_id.into(),
            kind,
            quantity,
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Shape checks that do not need the item.
    pub fn validate(&self) -> DomainResult<()> {
        require_text("itemId", &self.item_id)?;
        require_finite("quantity", self.quantity)?;
        match self.kind {
            MovementType::Adjustment if self.quantity < 0.0 => Err(DomainError::validation(
                "adjustment quantity cannot be negative",
            )),
            MovementType::Adjustment => Ok(()),
            _ if self.quantity <= 0.0 => Err(DomainError::validation(format!(
                "{} quantity must be positive",
                self.kind
            ))),
            _ => Ok(()),
        }
    }
}
