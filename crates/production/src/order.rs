use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, Entity, require_text};

/// Production order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ProductionStatus {
    pub const ALL: [ProductionStatus; 4] = [
        ProductionStatus::Scheduled,
        ProductionStatus::InProgress,
        ProductionStatus::Completed,
        ProductionStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductionStatus::Scheduled => "scheduled",
            ProductionStatus::InProgress => "in-progress",
            ProductionStatus::Completed => "completed",
            ProductionStatus::Cancelled => "cancelled",
        }
    }

    /// Still occupies capacity on the floor.
    pub fn is_open(self) -> bool {
        matches!(self, ProductionStatus::Scheduled | ProductionStatus::InProgress)
    }
}

impl core::fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductionStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown production status: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrder {
    pub id: String,
    pub product_name: String,
    pub work_order: String,
    pub customer: String,
    pub quantity: u32,
    pub unit: String,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub status: ProductionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for ProductionOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

fn default_unit() -> String {
    "pcs".to_string()
}

/// Input for scheduling a new production order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductionOrder {
    pub product_name: String,
    pub work_order: String,
    pub customer: String,
    pub quantity: u32,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrderPatch {
    pub product_name: Option<String>,
    pub work_order: Option<String>,
    pub customer: Option<String>,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<ProductionStatus>,
    pub notes: Option<String>,
}

impl ProductionOrder {
    /// Build a `scheduled` order from validated input.
    pub fn create(id: String, input: NewProductionOrder, now: DateTime<Utc>) -> DomainResult<Self> {
        let order = Self {
            id,
            product_name: input.product_name,
            work_order: input.work_order,
            customer: input.customer,
            quantity: input.quantity,
            unit: input.unit,
            start_date: input.start_date,
            end_date: input.end_date,
            status: ProductionStatus::Scheduled,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        order.validate()?;
        Ok(order)
    }

    pub fn validate(&self) -> DomainResult<()> {
        require_text("productName", &self.product_name)?;
        require_text("workOrder", &self.work_order)?;
        require_text("customer", &self.customer)?;
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(DomainError::validation("endDate cannot be before startDate"));
            }
        }
        Ok(())
    }

    /// Merge `patch` into a copy, validate it, and return the updated order.
    ///
    /// `self` is untouched when validation fails.
    pub fn patched(&self, patch: ProductionOrderPatch, now: DateTime<Utc>) -> DomainResult<Self> {
        let mut next = self.clone();
        if let Some(v) = patch.product_name {
            next.product_name = v;
        }
        if let Some(v) = patch.work_order {
            next.work_order = v;
        }
        if let Some(v) = patch.customer {
            next.customer = v;
        }
        if let Some(v) = patch.quantity {
            next.quantity = v;
        }
        if let Some(v) = patch.unit {
            next.unit = v;
        }
        if let Some(v) = patch.start_date {
            next.start_date = v;
        }
        if patch.end_date.is_some() {
            next.end_date = patch.end_date;
        }
        if let Some(v) = patch.status {
            next.status = v;
        }
        if patch.notes.is_some() {
            next.notes = patch.notes;
        }
        next.validate()?;
        next.updated_at = now;
        Ok(next)
    }
}

/// Order list query: status tab + free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub status: Option<ProductionStatus>,
    /// Case-insensitive substring over product name, work order, customer.
    pub search: Option<String>,
}

impl OrderQuery {
    pub fn matches(&self, order: &ProductionOrder) -> bool {
        if self.status.is_some_and(|s| s != order.status) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                [&order.product_name, &order.work_order, &order.customer]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&term))
            }
        }
    }

    pub fn run(&self, orders: &[ProductionOrder]) -> Vec<ProductionOrder> {
        orders.iter().filter(|o| self.matches(o)).cloned().collect()
    }
}
