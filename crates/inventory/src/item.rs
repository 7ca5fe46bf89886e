use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, Entity, require_finite, require_text};

/// A stock-keeping record.
///
/// `quantity` has no public setter: it only changes through
/// [`InventoryLedger::record_movement`](crate::InventoryLedger::record_movement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    quantity: f64,
    unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::serde_helpers::blank_number::deserialize")]
    reorder_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::serde_helpers::blank_number::deserialize")]
    cost: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StockItem {
    pub(crate) fn from_input(id: String, input: NewStockItem, quantity: f64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            description: input.description,
            quantity,
            unit: input.unit,
            reorder_point: input.reorder_point,
            location: input.location,
            supplier: input.supplier,
            cost: input.cost,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn reorder_point(&self) -> Option<f64> {
        self.reorder_point
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Low stock: a reorder point is set and the quantity is at or below it.
    ///
    /// Derived on read, never stored.
    pub fn is_low_stock(&self) -> bool {
        self.reorder_point.is_some_and(|rp| self.quantity <= rp)
    }

    /// `quantity * cost`, or zero when no unit cost is recorded.
    pub fn stock_value(&self) -> f64 {
        self.cost.map_or(0.0, |c| c * self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64, now: DateTime<Utc>) {
        self.quantity = quantity;
        self.updated_at = now;
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Entity for StockItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for creating a stock item.
///
/// `quantity` is optional only so a missing value can be reported as a
/// validation failure rather than silently defaulting to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::blank_number::deserialize")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::blank_number::deserialize")]
    pub reorder_point: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::blank_number::deserialize")]
    pub cost: Option<f64>,
}

impl NewStockItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: unit.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_reorder_point(mut self, reorder_point: f64) -> Self {
        self.reorder_point = Some(reorder_point);
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Check required fields and numeric ranges; returns the starting quantity.
    pub fn validate(&self) -> DomainResult<f64> {
        require_text("name", &self.name)?;
        require_text("unit", &self.unit)?;

        let quantity = self
            .quantity
            .ok_or_else(|| DomainError::validation("quantity is required"))?;
        require_finite("quantity", quantity)?;
        if quantity < 0.0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }

        if let Some(rp) = self.reorder_point {
            require_finite("reorderPoint", rp)?;
            if rp < 0.0 {
                return Err(DomainError::validation("reorderPoint cannot be negative"));
            }
        }
        if let Some(cost) = self.cost {
            require_finite("cost", cost)?;
            if cost < 0.0 {
                return Err(DomainError::validation("cost cannot be negative"));
            }
        }

        Ok(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, reorder_point: Option<f64>) -> StockItem {
        let mut input = NewStockItem::new("Bolts", quantity, "box");
        input.reorder_point = reorder_point;
        StockItem::from_input("INV-1".into(), input, quantity, Utc::now())
    }

    #[test]
    fn low_stock_is_inclusive_of_reorder_point() {
        assert!(item(20.0, Some(20.0)).is_low_stock());
        assert!(item(5.0, Some(20.0)).is_low_stock());
        assert!(!item(21.0, Some(20.0)).is_low_stock());
    }

    #[test]
    fn no_reorder_point_is_never_low_stock() {
        assert!(!item(0.0, None).is_low_stock());
    }

    #[test]
    fn validate_requires_name_unit_and_quantity() {
        assert!(NewStockItem::new("", 1.0, "box").validate().is_err());
        assert!(NewStockItem::new("Bolts", 1.0, " ").validate().is_err());

        let missing_qty = NewStockItem {
            name: "Bolts".into(),
            unit: "box".into(),
            ..NewStockItem::default()
        };
        assert_eq!(
            missing_qty.validate(),
            Err(DomainError::validation("quantity is required"))
        );
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        assert!(NewStockItem::new("Bolts", -1.0, "box").validate().is_err());
        assert!(NewStockItem::new("Bolts", f64::NAN, "box").validate().is_err());
        assert!(
            NewStockItem::new("Bolts", 1.0, "box")
                .with_cost(f64::INFINITY)
                .validate()
                .is_err()
        );
        assert_eq!(NewStockItem::new("Bolts", 0.0, "box").validate(), Ok(0.0));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(item(3.0, Some(1.0))).unwrap();
        assert_eq!(json["reorderPoint"], 1.0);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn blank_form_numbers_are_unset() {
        let stored: StockItem = serde_json::from_value(serde_json::json!({
            "id": "INV-1",
            "name": "Bolts",
            "quantity": 4,
            "unit": "box",
            "reorderPoint": "",
            "cost": "",
            "createdAt": "2024-03-01T09:00:00.000Z",
            "updatedAt": "2024-03-01T09:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(stored.reorder_point(), None);
        assert_eq!(stored.cost(), None);
        assert!(!stored.is_low_stock());

        let form: NewStockItem =
            serde_json::from_value(serde_json::json!({"name": "Bolts", "unit": "box", "quantity": ""})).unwrap();
        assert_eq!(form.validate(), Err(DomainError::validation("quantity is required")));
    }
}
