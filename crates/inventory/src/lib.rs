//! Inventory ledger domain module.
//!
//! Stock items plus an append-only log of stock movements. Movements are the
//! only way an item's quantity changes. Everything here is deterministic
//! domain logic (no IO, no storage); ids and time are passed in.

pub mod item;
pub mod ledger;
pub mod movement;
pub mod query;
pub mod seed;
pub mod serde_helpers;

pub use item::{NewStockItem, StockItem};
pub use ledger::{Discrepancy, InventoryLedger};
pub use movement::{MovementType, NewMovement, StockMovement};
pub use query::{ItemQuery, SortDirection, SortField};

/// Prefix for stock item ids.
pub const ITEM_ID_PREFIX: &str = "INV";
/// Prefix for stock movement ids.
pub const MOVEMENT_ID_PREFIX: &str = "MOV";
