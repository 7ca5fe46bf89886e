//! Sample production orders written on first use of an empty store.

use chrono::{DateTime, TimeZone, Utc};

use crate::order::{ProductionOrder, ProductionStatus};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    product_name: &str,
    work_order: &str,
    customer: &str,
    quantity: u32,
    (start, end): (DateTime<Utc>, DateTime<Utc>),
    status: ProductionStatus,
    notes: &str,
    (created_at, updated_at): (DateTime<Utc>, DateTime<Utc>),
) -> ProductionOrder {
    ProductionOrder {
        id: id.into(),
        product_name: product_name.into(),
        work_order: work_order.into(),
        customer: customer.into(),
        quantity,
        unit: "pcs".into(),
        start_date: start,
        end_date: Some(end),
        status,
        notes: Some(notes.into()),
        created_at,
        updated_at,
    }
}

pub fn sample_orders() -> Vec<ProductionOrder> {
    use ProductionStatus::*;

    vec![
        order(
            "PROD-00001",
            "Aluminum Enclosure Type A",
            "WO-2023-1542",
            "TechSolutions Inc.",
            100,
            (at(2023, 9, 15, 0, 0), at(2023, 9, 30, 0, 0)),
            Completed,
            "Standard order with regular specifications",
            (at(2023, 9, 10, 8, 30), at(2023, 10, 2, 14, 15)),
        ),
        order(
            "PROD-00002",
            "Circuit Board Assembly X500",
            "WO-2023-1612",
            "ElectroPro Systems",
            50,
            (at(2023, 9, 25, 0, 0), at(2023, 10, 15, 0, 0)),
            InProgress,
            "Special coating required for marine environment",
            (at(2023, 9, 20, 10, 15), at(2023, 9, 26, 11, 30)),
        ),
        order(
            "PROD-00003",
            "Industrial Control Panel CP-200",
            "WO-2023-1655",
            "Factory Automation Ltd.",
            25,
            (at(2023, 10, 5, 0, 0), at(2023, 10, 25, 0, 0)),
            Scheduled,
            "Custom firmware installation required",
            (at(2023, 9, 28, 9, 45), at(2023, 9, 28, 9, 45)),
        ),
        order(
            "PROD-00004",
            "Precision Steel Brackets",
            "WO-2023-1687",
            "Construction Partners Inc.",
            200,
            (at(2023, 9, 10, 0, 0), at(2023, 9, 18, 0, 0)),
            Completed,
            "Quality check confirmed all specs met",
            (at(2023, 9, 5, 14, 20), at(2023, 9, 19, 16, 10)),
        ),
        order(
            "PROD-00005",
            "Hydraulic Valve Assembly HV-100",
            "WO-2023-1701",
            "FluidTech Industries",
            30,
            (at(2023, 10, 10, 0, 0), at(2023, 10, 30, 0, 0)),
            Scheduled,
            "High-pressure testing required before shipping",
            (at(2023, 10, 1, 11, 0), at(2023, 10, 1, 11, 0)),
        ),
        order(
            "PROD-00006",
            "Custom Electronic Enclosures",
            "WO-2023-1720",
            "Telecom Systems Corp",
            75,
            (at(2023, 9, 20, 0, 0), at(2023, 10, 15, 0, 0)),
            InProgress,
            "Modified design as per client request on Sept 25",
            (at(2023, 9, 15, 13, 40), at(2023, 9, 25, 10, 25)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_orders_are_valid() {
        let orders = sample_orders();
        assert_eq!(orders.len(), 6);
        for o in &orders {
            o.validate().unwrap();
        }
    }
}
