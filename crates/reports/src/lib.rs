//! Dashboard aggregates computed from the stored collections.
//!
//! Every function here is a pure fold over a slice; nothing is persisted.

pub mod customers;
pub mod inventory;
pub mod production;
pub mod workforce;

pub use customers::{CustomerReport, customer_report};
pub use inventory::{CategoryStock, InventoryReport, ItemValue, inventory_report};
pub use production::{ProductionReport, production_report};
pub use workforce::{WorkforceReport, workforce_report};
