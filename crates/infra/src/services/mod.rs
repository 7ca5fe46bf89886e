//! Application services: each one owns a collection (or two) in the store.

pub mod customers;
pub mod inventory;
pub mod production;
pub mod workforce;

use std::sync::Arc;

use serde::Serialize;

use shopfloor_core::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use shopfloor_reports::{
    CustomerReport, InventoryReport, ProductionReport, WorkforceReport, customer_report, inventory_report,
    production_report, workforce_report,
};

pub use customers::CustomerService;
pub use inventory::InventoryService;
pub use production::ProductionService;
pub use workforce::WorkforceService;

use crate::error::ServiceResult;
use crate::store::KeyValueStore;

pub type SharedStore = Arc<dyn KeyValueStore>;
pub type SharedIds = Arc<dyn IdGenerator>;
pub type SharedClock = Arc<dyn Clock>;

/// Number of items listed in the dashboard's "top items by value".
const TOP_ITEMS: usize = 5;

/// All services over one shared store.
pub struct Shopfloor {
    pub inventory: InventoryService<SharedStore, SharedIds, SharedClock>,
    pub production: ProductionService<SharedStore, SharedIds, SharedClock>,
    pub workforce: WorkforceService<SharedStore, SharedIds>,
    pub customers: CustomerService<SharedStore, SharedIds, SharedClock>,
}

/// Every report, computed from the current contents of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub inventory: InventoryReport,
    pub production: ProductionReport,
    pub workforce: WorkforceReport,
    pub customers: CustomerReport,
}

impl Shopfloor {
    pub fn new(store: SharedStore) -> Self {
        Self::with_parts(store, Arc::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    pub fn with_parts(store: SharedStore, ids: SharedIds, clock: SharedClock) -> Self {
        Self {
            inventory: InventoryService::with_parts(store.clone(), ids.clone(), clock.clone()),
            production: ProductionService::with_parts(store.clone(), ids.clone(), clock.clone()),
            workforce: WorkforceService::with_ids(store.clone(), ids.clone()),
            customers: CustomerService::with_parts(store, ids, clock),
        }
    }

    pub fn dashboard(&self) -> ServiceResult<Dashboard> {
        Ok(Dashboard {
            inventory: inventory_report(&self.inventory.list_items()?, TOP_ITEMS),
            production: production_report(&self.production.list_orders()?),
            workforce: workforce_report(&self.workforce.list_employees()?),
            customers: customer_report(&self.customers.list_customers()?),
        })
    }
}
