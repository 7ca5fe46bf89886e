use std::collections::BTreeMap;

use serde::Serialize;

use shopfloor_production::{ProductionOrder, ProductionStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    pub total_orders: usize,
    /// Every status is present, zero when no order has it.
    pub by_status: BTreeMap<String, usize>,
    /// Units on scheduled or in-progress orders.
    pub open_units: u64,
    pub completed_units: u64,
    /// completed / (all - cancelled); `None` when nothing counts.
    pub completion_rate: Option<f64>,
}

pub fn production_report(orders: &[ProductionOrder]) -> ProductionReport {
    let mut by_status: BTreeMap<String, usize> = ProductionStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut open_units = 0u64;
    let mut completed_units = 0u64;
    let mut completed = 0usize;
    let mut cancelled = 0usize;

    for order in orders {
        *by_status.entry(order.status.as_str().to_string()).or_default() += 1;
        match order.status {
            s if s.is_open() => open_units += u64::from(order.quantity),
            ProductionStatus::Completed => {
                completed += 1;
                completed_units += u64::from(order.quantity);
            }
            ProductionStatus::Cancelled => cancelled += 1,
            _ => {}
        }
    }

    let counted = orders.len() - cancelled;
    ProductionReport {
        total_orders: orders.len(),
        by_status,
        open_units,
        completed_units,
        completion_rate: (counted > 0).then(|| completed as f64 / counted as f64),
    }
}
