use shopfloor_core::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use shopfloor_production::seed::sample_orders;
use shopfloor_production::{
    NewProductionOrder, ORDER_ID_PREFIX, OrderQuery, ProductionOrder, ProductionOrderPatch,
};

use crate::collection::{Collection, keys};
use crate::error::ServiceResult;
use crate::repository::Repository;
use crate::store::KeyValueStore;

pub const ORDERS: Collection<ProductionOrder> =
    Collection::new(keys::PRODUCTION_ORDERS, "production order", sample_orders);

#[derive(Debug)]
pub struct ProductionService<S, G = UuidIdGenerator, C = SystemClock> {
    repo: Repository<ProductionOrder, S>,
    ids: G,
    clock: C,
}

impl<S: KeyValueStore> ProductionService<S> {
    pub fn new(store: S) -> Self {
        Self::with_parts(store, UuidIdGenerator, SystemClock)
    }
}

impl<S, G, C> ProductionService<S, G, C>
where
    S: KeyValueStore,
    G: IdGenerator,
    C: Clock,
{
    pub fn with_parts(store: S, ids: G, clock: C) -> Self {
        Self {
            repo: Repository::new(store, ORDERS),
            ids,
            clock,
        }
    }

    pub fn list_orders(&self) -> ServiceResult<Vec<ProductionOrder>> {
        Ok(self.repo.list()?)
    }

    pub fn get_order(&self, id: &str) -> ServiceResult<Option<ProductionOrder>> {
        Ok(self.repo.get(id)?)
    }

    pub fn query_orders(&self, query: &OrderQuery) -> ServiceResult<Vec<ProductionOrder>> {
        Ok(query.run(&self.repo.list()?))
    }

    pub fn create_order(&self, input: NewProductionOrder) -> ServiceResult<ProductionOrder> {
        let order = ProductionOrder::create(self.ids.new_id(ORDER_ID_PREFIX), input, self.clock.now())
            .inspect_err(|err| tracing::warn!(error = %err, "production order rejected"))?;
        let order = self.repo.insert(order)?;
        tracing::info!(order_id = %order.id, work_order = %order.work_order, "production order scheduled");
        Ok(order)
    }

    pub fn update_order(&self, id: &str, patch: ProductionOrderPatch) -> ServiceResult<ProductionOrder> {
        let now = self.clock.now();
        let order = self.repo.update_with(id, |current| current.patched(patch, now))?;
        tracing::info!(order_id = %order.id, status = %order.status, "production order updated");
        Ok(order)
    }

    pub fn delete_order(&self, id: &str) -> ServiceResult<bool> {
        let removed = self.repo.remove(id)?;
        if removed {
            tracing::info!(order_id = id, "production order deleted");
        }
        Ok(removed)
    }
}
