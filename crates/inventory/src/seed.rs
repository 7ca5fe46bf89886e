//! Built-in sample data written on first use of an empty store.

use chrono::{DateTime, TimeZone, Utc};

use crate::item::StockItem;
use crate::ledger::InventoryLedger;
use crate::movement::{MovementType, StockMovement};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap_or_default()
}

struct SampleItem {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    quantity: f64,
    unit: &'static str,
    reorder_point: f64,
    location: &'static str,
    supplier: &'static str,
    cost: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SampleItem> for StockItem {
    fn from(s: SampleItem) -> Self {
        let input = crate::item::NewStockItem {
            name: s.name.into(),
            quantity: Some(s.quantity),
            unit: s.unit.into(),
            category: Some(s.category.into()),
            description: Some(s.description.into()),
            reorder_point: Some(s.reorder_point),
            location: Some(s.location.into()),
            supplier: Some(s.supplier.into()),
            cost: Some(s.cost),
        };
        let mut item = StockItem::from_input(s.id.into(), input, s.quantity, s.created_at);
        item.touch(s.updated_at);
        item
    }
}

pub fn sample_items() -> Vec<StockItem> {
    vec![
        SampleItem {
            id: "INV-00001",
            name: "Aluminum Sheet (4ft x 8ft)",
            category: "Raw Materials",
            description: "Standard aluminum sheet for manufacturing",
            quantity: 120.0,
            unit: "sheet",
            reorder_point: 20.0,
            location: "Warehouse A, Rack 12",
            supplier: "Metal Supplies Inc.",
            cost: 45.99,
            created_at: at(2023, 8, 15, 8, 30),
            updated_at: at(2023, 9, 2, 14, 15),
        }
        .into(),
        SampleItem {
            id: "INV-00002",
            name: "Steel Rods (12mm)",
            category: "Raw Materials",
            description: "12mm steel rods for structural components",
            quantity: 350.0,
            unit: "rod",
            reorder_point: 50.0,
            location: "Warehouse A, Rack 8",
            supplier: "Steel Dynamics Corp",
            cost: 12.75,
            created_at: at(2023, 8, 10, 9, 45),
            updated_at: at(2023, 9, 1, 11, 20),
        }
        .into(),
        SampleItem {
            id: "INV-00003",
            name: "Control Circuitry PCB",
            category: "Electronics",
            description: "Pre-assembled control circuit boards",
            quantity: 85.0,
            unit: "piece",
            reorder_point: 15.0,
            location: "Secure Storage, Cabinet 3",
            supplier: "Tech Electronics Ltd.",
            cost: 67.50,
            created_at: at(2023, 8, 20, 10, 15),
            updated_at: at(2023, 8, 28, 16, 30),
        }
        .into(),
    ]
}

fn movement(
    id: &str,
    item_id: &str,
    item_name: &str,
    kind: MovementType,
    quantity: f64,
    when: DateTime<Utc>,
    notes: &str,
) -> StockMovement {
    StockMovement {
        id: id.into(),
        item_id: item_id.into(),
        item_name: item_name.into(),
        kind,
        quantity,
        date: when.date_naive(),
        timestamp: when,
        notes: Some(notes.into()),
    }
}

pub fn sample_movements() -> Vec<StockMovement> {
    const ALU: &str = "Aluminum Sheet (4ft x 8ft)";
    const STEEL: &str = "Steel Rods (12mm)";
    const PCB: &str = "Control Circuitry PCB";

    vec![
        movement("MOV-00001", "INV-00001", ALU, MovementType::Initial, 100.0, at(2023, 8, 15, 8, 30), "Initial inventory setup"),
        movement("MOV-00002", "INV-00001", ALU, MovementType::Addition, 20.0, at(2023, 9, 2, 14, 15), "Order from Metal Supplies Inc."),
        movement("MOV-00003", "INV-00002", STEEL, MovementType::Initial, 300.0, at(2023, 8, 10, 9, 45), "Initial inventory setup"),
        movement("MOV-00004", "INV-00002", STEEL, MovementType::Addition, 50.0, at(2023, 9, 1, 11, 20), "Replenishment order"),
        movement("MOV-00005", "INV-00003", PCB, MovementType::Initial, 85.0, at(2023, 8, 20, 10, 15), "Initial inventory setup"),
    ]
}

impl InventoryLedger {
    /// Ledger pre-populated with the sample items and their movement log.
    pub fn sample() -> Self {
        Self::new(sample_items(), sample_movements())
    }
}
