//! Production orders: what is being built, for whom, and where it stands.

pub mod order;
pub mod seed;

pub use order::{NewProductionOrder, OrderQuery, ProductionOrder, ProductionOrderPatch, ProductionStatus};

/// Prefix for production order ids.
pub const ORDER_ID_PREFIX: &str = "PROD";
