//! Inventory ledger backed by the key-value store.

use std::sync::{Mutex, MutexGuard};

use shopfloor_core::{Clock, Entity, IdGenerator, SystemClock, UuidIdGenerator};
use shopfloor_inventory::query::{self, ItemQuery};
use shopfloor_inventory::seed::{sample_items, sample_movements};
use shopfloor_inventory::{Discrepancy, InventoryLedger, NewMovement, NewStockItem, StockItem, StockMovement};

use crate::collection::{Collection, keys};
use crate::error::ServiceResult;
use crate::store::{KeyValueStore, StoreError};

pub const ITEMS: Collection<StockItem> = Collection::new(keys::INVENTORY_ITEMS, "inventory item", sample_items);
pub const MOVEMENTS: Collection<StockMovement> =
    Collection::new(keys::INVENTORY_MOVEMENTS, "stock movement", sample_movements);

/// The inventory ledger: stock items and their append-only movement log.
///
/// Each write loads both collections, applies the change through
/// [`InventoryLedger`], and saves items then movements. The whole cycle runs
/// under one lock.
#[derive(Debug)]
pub struct InventoryService<S, G = UuidIdGenerator, C = SystemClock> {
    store: S,
    ids: G,
    clock: C,
    lock: Mutex<()>,
}

impl<S: KeyValueStore> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self::with_parts(store, UuidIdGenerator, SystemClock)
    }
}

impl<S, G, C> InventoryService<S, G, C>
where
    S: KeyValueStore,
    G: IdGenerator,
    C: Clock,
{
    pub fn with_parts(store: S, ids: G, clock: C) -> Self {
        Self {
            store,
            ids,
            clock,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load(&self) -> Result<InventoryLedger, StoreError> {
        let items = ITEMS.load(&self.store)?;
        let movements = MOVEMENTS.load(&self.store)?;
        Ok(InventoryLedger::new(items, movements))
    }

    /// Save both collections. If the movement write fails, the previous
    /// item document is restored so the two stay consistent.
    fn persist(&self, ledger: &InventoryLedger, previous_items: &[StockItem]) -> Result<(), StoreError> {
        ITEMS.save(&self.store, ledger.items())?;
        if let Err(err) = MOVEMENTS.save(&self.store, ledger.movements()) {
            if let Err(rollback) = ITEMS.save(&self.store, previous_items) {
                tracing::error!(error = %rollback, "failed to restore inventory items after movement write failure");
            }
            return Err(err);
        }
        Ok(())
    }

    /// All stock items, seeding the sample set on first use.
    pub fn list_items(&self) -> ServiceResult<Vec<StockItem>> {
        let _g = self.guard();
        Ok(ITEMS.load(&self.store)?)
    }

    /// The whole movement log in recording order, seeding on first use.
    pub fn list_movements(&self) -> ServiceResult<Vec<StockMovement>> {
        let _g = self.guard();
        Ok(MOVEMENTS.load(&self.store)?)
    }

    pub fn get_item(&self, id: &str) -> ServiceResult<Option<StockItem>> {
        let _g = self.guard();
        let items = ITEMS.load(&self.store)?;
        Ok(items.into_iter().find(|i| i.id() == id))
    }

    /// Snapshot of items and movements together.
    pub fn ledger(&self) -> ServiceResult<InventoryLedger> {
        let _g = self.guard();
        Ok(self.load()?)
    }

    pub fn create_item(&self, input: NewStockItem) -> ServiceResult<StockItem> {
        let _g = self.guard();
        let mut ledger = self.load()?;
        let previous = ledger.items().to_vec();

        let (item, movement) = ledger
            .create_item(input, &self.ids, self.clock.now())
            .inspect_err(|err| tracing::warn!(error = %err, "inventory item rejected"))?;
        self.persist(&ledger, &previous)?;

        tracing::info!(
            item_id = %item.id(),
            movement_id = %movement.id,
            quantity = item.quantity(),
            unit = item.unit(),
            "inventory item created"
        );
        Ok(item)
    }

    pub fn record_movement(&self, input: NewMovement) -> ServiceResult<StockMovement> {
        let _g = self.guard();
        let mut ledger = self.load()?;
        let previous = ledger.items().to_vec();

        let movement = ledger
            .record_movement(input, &self.ids, self.clock.now())
            .inspect_err(|err| tracing::warn!(error = %err, "stock movement rejected"))?;
        self.persist(&ledger, &previous)?;

        tracing::info!(
            movement_id = %movement.id,
            item_id = %movement.item_id,
            kind = %movement.kind,
            quantity = movement.quantity,
            "stock movement recorded"
        );
        Ok(movement)
    }

    pub fn query_items(&self, query: &ItemQuery) -> ServiceResult<Vec<StockItem>> {
        Ok(query.run(&self.list_items()?))
    }

    pub fn categories(&self) -> ServiceResult<Vec<String>> {
        Ok(query::categories(&self.list_items()?))
    }

    pub fn low_stock_items(&self) -> ServiceResult<Vec<StockItem>> {
        Ok(query::low_stock(&self.list_items()?))
    }

    /// Movements for one item, newest first; `None` lists the whole log.
    pub fn history(&self, item_id: Option<&str>) -> ServiceResult<Vec<StockMovement>> {
        let movements = self.list_movements()?;
        Ok(match item_id {
            Some(id) => query::history_for(&movements, id),
            None => query::recent_movements(&movements),
        })
    }

    /// Items whose stored quantity disagrees with their movement log.
    pub fn reconcile(&self) -> ServiceResult<Vec<Discrepancy>> {
        let report = self.ledger()?.reconcile();
        if !report.is_empty() {
            tracing::warn!(items = report.len(), "inventory quantities drifted from movement log");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde_json::json;

    use shopfloor_core::{DomainError, FixedClock};
    use shopfloor_inventory::MovementType;

    use crate::error::ServiceError;
    use crate::store::InMemoryStore;

    #[derive(Default)]
    struct SeqIds(AtomicU64);

    impl IdGenerator for SeqIds {
        fn new_id(&self, prefix: &str) -> String {
            format!("{prefix}-T{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn service() -> (InventoryService<Arc<InMemoryStore>, SeqIds, FixedClock>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let svc = InventoryService::with_parts(store.clone(), SeqIds::default(), FixedClock(test_time()));
        (svc, store)
    }

    fn movement(item_id: &str, kind: MovementType, quantity: f64) -> NewMovement {
        NewMovement::new(item_id, kind, quantity, test_time().date_naive())
    }

    #[test]
    fn empty_store_lists_sample_items() {
        let (svc, store) = service();
        let items = svc.list_items().unwrap();

        let got: Vec<(&str, f64)> = items.iter().map(|i| (i.name(), i.quantity())).collect();
        assert_eq!(
            got,
            vec![
                ("Aluminum Sheet (4ft x 8ft)", 120.0),
                ("Steel Rods (12mm)", 350.0),
                ("Control Circuitry PCB", 85.0),
            ]
        );
        assert!(store.load(keys::INVENTORY_ITEMS).unwrap().is_some());
        assert_eq!(svc.list_movements().unwrap().len(), 5);
    }

    #[test]
    fn create_item_adds_one_initial_movement() {
        let (svc, _) = service();
        let before = svc.list_movements().unwrap().len();

        let item = svc.create_item(NewStockItem::new("Bolts", 50.0, "box")).unwrap();
        assert_eq!(item.quantity(), 50.0);
        assert_eq!(item.created_at(), test_time());

        let movements = svc.list_movements().unwrap();
        assert_eq!(movements.len(), before + 1);
        let m = movements.last().unwrap();
        assert_eq!(m.kind, MovementType::Initial);
        assert_eq!(m.quantity, 50.0);
        assert_eq!(m.item_id, item.id());

        assert_eq!(svc.get_item(item.id()).unwrap().unwrap().quantity(), 50.0);
    }

    #[test]
    fn invalid_item_writes_nothing() {
        let (svc, store) = service();
        let err = svc.create_item(NewStockItem::new("Bolts", -1.0, "box")).unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));
        // Loading for validation seeded the store, but no new item was added.
        assert_eq!(svc.list_items().unwrap().len(), 3);
        assert_eq!(store.load(keys::INVENTORY_MOVEMENTS).unwrap().unwrap().as_array().unwrap().len(), 5);
    }

    #[test]
    fn over_withdrawal_fails_and_quantity_is_unchanged() {
        let (svc, _) = service();
        let item = svc.create_item(NewStockItem::new("Bolts", 10.0, "box")).unwrap();
        let log_len = svc.list_movements().unwrap().len();

        let err = svc
            .record_movement(movement(item.id(), MovementType::Withdrawal, 15.0))
            .unwrap_err();
        assert_eq!(err.as_domain().and_then(DomainError::available), Some(10.0));

        assert_eq!(svc.get_item(item.id()).unwrap().unwrap().quantity(), 10.0);
        assert_eq!(svc.list_movements().unwrap().len(), log_len);
    }

    #[test]
    fn addition_then_adjustment_ends_at_adjusted_value() {
        let (svc, _) = service();
        let item = svc.create_item(NewStockItem::new("Bolts", 10.0, "box")).unwrap();

        svc.record_movement(movement(item.id(), MovementType::Addition, 5.0)).unwrap();
        svc.record_movement(movement(item.id(), MovementType::Adjustment, 3.0)).unwrap();

        assert_eq!(svc.get_item(item.id()).unwrap().unwrap().quantity(), 3.0);
        assert!(svc.reconcile().unwrap().is_empty());

        let history = svc.history(Some(item.id())).unwrap();
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn unknown_item_is_rejected_and_nothing_is_logged() {
        let (svc, _) = service();
        let log_len = svc.list_movements().unwrap().len();

        let err = svc
            .record_movement(movement("INV-ghost", MovementType::Addition, 1.0))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::ItemNotFound(_))));
        assert_eq!(svc.list_movements().unwrap().len(), log_len);
    }

    #[test]
    fn persisted_collections_reload_equal() {
        let (svc, store) = service();
        let item = svc
            .create_item(
                NewStockItem::new("Hex Nuts", 12.5, "kg")
                    .with_category("Fasteners")
                    .with_reorder_point(15.0)
                    .with_cost(3.2),
            )
            .unwrap();
        svc.record_movement(movement(item.id(), MovementType::Withdrawal, 0.5).with_notes("line 2"))
            .unwrap();
        let items = svc.list_items().unwrap();
        let movements = svc.list_movements().unwrap();

        let reopened = InventoryService::with_parts(store, SeqIds::default(), FixedClock(test_time()));
        assert_eq!(reopened.list_items().unwrap(), items);
        assert_eq!(reopened.list_movements().unwrap(), movements);
        assert_eq!(reopened.low_stock_items().unwrap().len(), 1);
    }

    #[test]
    fn reads_blob_written_in_original_layout() {
        let store = Arc::new(InMemoryStore::new());
        store
            .save(
                keys::INVENTORY_ITEMS,
                &json!([{
                    "id": "INV-1700000000000-0042",
                    "name": "Copper Wire",
                    "quantity": 40,
                    "unit": "spool",
                    "reorderPoint": 40,
                    "createdAt": "2023-10-01T00:00:00Z",
                    "updatedAt": "2023-10-01T00:00:00Z"
                }]),
            )
            .unwrap();
        let svc = InventoryService::new(store);

        let low = svc.low_stock_items().unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name(), "Copper Wire");

        // Movements key was absent, so the sample log is seeded and this
        // item has no history to reconcile against.
        let drift = svc.reconcile().unwrap();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].replayed, None);
    }

    #[test]
    fn reads_form_shaped_records() {
        let (svc, store) = service();
        svc.list_items().unwrap();
        let mut movements = store.load(keys::INVENTORY_MOVEMENTS).unwrap().unwrap();
        movements.as_array_mut().unwrap().push(json!({
            "id": "MOV-1709290000000-1234",
            "itemId": "INV-00001",
            "itemName": "Aluminum Sheet (4ft x 8ft)",
            "type": "addition",
            "quantity": 5,
            "date": "2024-03-01",
            "notes": "",
            "timestamp": "2024-03-01T10:00:00.000Z"
        }));
        store.save(keys::INVENTORY_MOVEMENTS, &movements).unwrap();

        let mut items = store.load(keys::INVENTORY_ITEMS).unwrap().unwrap();
        items.as_array_mut().unwrap().push(json!({
            "id": "INV-1709290000000-0042",
            "name": "Shop Rags",
            "category": "",
            "quantity": 30,
            "unit": "bag",
            "reorderPoint": "",
            "cost": "",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-01T10:00:00.000Z"
        }));
        store.save(keys::INVENTORY_ITEMS, &items).unwrap();

        let log = svc.list_movements().unwrap();
        assert_eq!(log.last().unwrap().date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let rags = svc.get_item("INV-1709290000000-0042").unwrap().unwrap();
        assert_eq!((rags.reorder_point(), rags.cost()), (None, None));
        assert_eq!(rags.stock_value(), 0.0);

        svc.record_movement(movement("INV-1709290000000-0042", MovementType::Withdrawal, 4.0))
            .unwrap();
        assert_eq!(svc.get_item("INV-1709290000000-0042").unwrap().unwrap().quantity(), 26.0);
        assert_eq!(svc.list_movements().unwrap().len(), log.len() + 1);
    }

    /// In-memory store whose movement writes can be made to fail.
    struct FailingMovements {
        inner: InMemoryStore,
        fail: AtomicBool,
    }

    impl KeyValueStore for FailingMovements {
        fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
            self.inner.load(key)
        }

        fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
            if key == keys::INVENTORY_MOVEMENTS && self.fail.load(Ordering::SeqCst) {
                return Err(StoreError::Io {
                    path: PathBuf::from(format!("{key}.json")),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.save(key, value)
        }
    }

    #[test]
    fn failed_movement_write_restores_items() {
        let store = Arc::new(FailingMovements {
            inner: InMemoryStore::new(),
            fail: AtomicBool::new(false),
        });
        let svc = InventoryService::with_parts(store.clone(), SeqIds::default(), FixedClock(test_time()));
        svc.list_items().unwrap();
        svc.list_movements().unwrap();
        let items_before = store.load(keys::INVENTORY_ITEMS).unwrap();
        let movements_before = store.load(keys::INVENTORY_MOVEMENTS).unwrap();
        store.fail.store(true, Ordering::SeqCst);

        let err = svc.create_item(NewStockItem::new("Bolts", 50.0, "box")).unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::Io { .. })));
        assert_eq!(store.load(keys::INVENTORY_ITEMS).unwrap(), items_before);

        let err = svc
            .record_movement(movement("INV-00001", MovementType::Addition, 5.0))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::Io { .. })));
        assert_eq!(store.load(keys::INVENTORY_ITEMS).unwrap(), items_before);
        assert_eq!(store.load(keys::INVENTORY_MOVEMENTS).unwrap(), movements_before);

        store.fail.store(false, Ordering::SeqCst);
        assert_eq!(svc.get_item("INV-00001").unwrap().unwrap().quantity(), 120.0);
        assert!(svc.reconcile().unwrap().is_empty());
    }

    #[test]
    fn query_and_categories() {
        let (svc, _) = service();
        let q = ItemQuery {
            search: Some("steel".into()),
            ..ItemQuery::default()
        };
        let hits = svc.query_items(&q).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(svc.categories().unwrap(), vec!["Electronics", "Raw Materials"]);
    }
}
