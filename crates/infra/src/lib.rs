//! Infrastructure layer: persistence adapters, configuration, and the
//! services that run domain logic against the store.

pub mod collection;
pub mod config;
pub mod error;
pub mod repository;
pub mod services;
pub mod store;

pub use config::{StoreBackend, StoreConfig};
pub use error::{ServiceError, ServiceResult};
pub use services::{CustomerService, Dashboard, InventoryService, ProductionService, Shopfloor, WorkforceService};
pub use store::{FileStore, InMemoryStore, KeyValueStore, StoreError};
