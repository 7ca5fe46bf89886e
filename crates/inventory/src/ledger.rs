use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, Entity, IdGenerator, find_by_id, position_of};

use crate::item::{NewStockItem, StockItem};
use crate::movement::{MovementType, NewMovement, StockMovement};
use crate::{ITEM_ID_PREFIX, MOVEMENT_ID_PREFIX};

const INITIAL_NOTES: &str = "Initial inventory setup";
const EPSILON: f64 = 1e-9;

/// In-memory state of the inventory ledger: items plus the movement log.
///
/// All mutations validate first and only then touch state, so a rejected
/// operation leaves both collections unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryLedger {
    items: Vec<StockItem>,
    movements: Vec<StockMovement>,
}

/// An item whose stored quantity disagrees with what its movement log implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    pub item_id: String,
    pub item_name: String,
    pub stored: f64,
    /// `None` when the item has no movements at all.
    pub replayed: Option<f64>,
}

impl InventoryLedger {
    pub fn new(items: Vec<StockItem>, movements: Vec<StockMovement>) -> Self {
        Self { items, movements }
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn item(&self, id: &str) -> Option<&StockItem> {
        find_by_id(&self.items, id)
    }

    pub fn into_parts(self) -> (Vec<StockItem>, Vec<StockMovement>) {
        (self.items, self.movements)
    }

    /// Create an item and its `initial` movement.
    ///
    /// The initial movement records the starting quantity but does not
    /// change it.
    pub fn create_item(
        &mut self,
        input: NewStockItem,
        ids: &dyn IdGenerator,
        now: DateTime<Utc>,
    ) -> DomainResult<(StockItem, StockMovement)> {
        let quantity = input.validate()?;

        let item = StockItem::from_input(ids.new_id(ITEM_ID_PREFIX), input, quantity, now);
        self.items.push(item.clone());

        let movement = StockMovement {
            id: ids.new_id(MOVEMENT_ID_PREFIX),
            item_id: item.id().to_string(),
            item_name: item.name().to_string(),
            kind: MovementType::Initial,
            quantity,
            date: now.date_naive(),
            timestamp: now,
            notes: Some(INITIAL_NOTES.to_string()),
        };
        self.movements.push(movement.clone());

        Ok((item, movement))
    }

    /// Append a movement and apply its quantity rule to the referenced item.
    ///
    /// Fails without writing anything when the input is malformed, the item
    /// does not exist, or a withdrawal exceeds the available quantity.
    pub fn record_movement(
        &mut self,
        input: NewMovement,
        ids: &dyn IdGenerator,
        now: DateTime<Utc>,
    ) -> DomainResult<StockMovement> {
        input.validate()?;

        let idx = position_of(&self.items, &input.item_id)
            .ok_or_else(|| DomainError::item_not_found(input.item_id.clone()))?;
        let item = &mut self.items[idx];

        if input.kind == MovementType::Withdrawal && input.quantity > item.quantity() {
            return Err(DomainError::insufficient_stock(
                input.item_id,
                item.quantity(),
                input.quantity,
            ));
        }

        let movement = StockMovement {
            id: ids.new_id(MOVEMENT_ID_PREFIX),
            item_id: input.item_id,
            item_name: item.name().to_string(),
            kind: input.kind,
            quantity: input.quantity,
            date: input.date,
            timestamp: now,
            notes: input.notes,
        };

        match movement.kind {
            MovementType::Initial => item.touch(now),
            kind => item.set_quantity(kind.apply(item.quantity(), movement.quantity), now),
        }
        self.movements.push(movement.clone());

        Ok(movement)
    }

    /// Quantity implied by folding the item's movements in log order.
    ///
    /// The first `initial` movement sets the base; later ones are markers,
    /// same as on the write path.
    pub fn replay_quantity(&self, item_id: &str) -> Option<f64> {
        let mut quantity: Option<f64> = None;
        for m in self.movements.iter().filter(|m| m.item_id == item_id) {
            quantity = Some(match (quantity, m.kind) {
                (None, MovementType::Initial) => m.quantity,
                (current, kind) => kind.apply(current.unwrap_or(0.0), m.quantity),
            });
        }
        quantity
    }

    /// Items whose stored quantity does not match their replayed log.
    pub fn reconcile(&self) -> Vec<Discrepancy> {
        self.items
            .iter()
            .filter_map(|item| {
                let replayed = self.replay_quantity(item.id());
                let agrees = replayed.is_some_and(|q| (q - item.quantity()).abs() < EPSILON);
                (!agrees).then(|| Discrepancy {
                    item_id: item.id().to_string(),
                    item_name: item.name().to_string(),
                    stored: item.quantity(),
                    replayed,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic ids for tests: `<PREFIX>-1`, `<PREFIX>-2`, ...
    #[derive(Default)]
    struct SeqIds(AtomicU64);

    impl IdGenerator for SeqIds {
        fn new_id(&self, prefix: &str) -> String {
            format!("{prefix}-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn ledger_with(quantity: f64) -> (InventoryLedger, SeqIds, String) {
        let ids = SeqIds::default();
        let mut ledger = InventoryLedger::default();
        let (item, _) = ledger
            .create_item(NewStockItem::new("Bolts", quantity, "box"), &ids, test_time())
            .unwrap();
        let id = item.id().to_string();
        (ledger, ids, id)
    }

    #[test]
    fn create_item_writes_one_initial_movement() {
        let (ledger, _, id) = ledger_with(50.0);

        let item = ledger.item(&id).unwrap();
        assert_eq!(item.quantity(), 50.0);
        assert_eq!(item.created_at(), item.updated_at());

        assert_eq!(ledger.movements().len(), 1);
        let m = &ledger.movements()[0];
        assert_eq!(m.kind, MovementType::Initial);
        assert_eq!(m.quantity, 50.0);
        assert_eq!(m.item_id, id);
        assert_eq!(m.item_name, "Bolts");
        assert_eq!(m.notes.as_deref(), Some(INITIAL_NOTES));
    }

    #[test]
    fn create_item_allows_zero_starting_quantity() {
        let (ledger, _, id) = ledger_with(0.0);
        assert_eq!(ledger.item(&id).unwrap().quantity(), 0.0);
        assert_eq!(ledger.movements()[0].quantity, 0.0);
    }

    #[test]
    fn create_item_rejects_invalid_input_without_writing() {
        let ids = SeqIds::default();
        let mut ledger = InventoryLedger::default();
        let err = ledger
            .create_item(NewStockItem::new("", 1.0, "box"), &ids, test_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(ledger.items().is_empty());
        assert!(ledger.movements().is_empty());
    }

    #[test]
    fn over_withdrawal_is_rejected_and_changes_nothing() {
        let (mut ledger, ids, id) = ledger_with(10.0);
        let before = ledger.clone();

        let err = ledger
            .record_movement(
                NewMovement::new(&id, MovementType::Withdrawal, 15.0, test_time().date_naive()),
                &ids,
                test_time(),
            )
            .unwrap_err();

        assert_eq!(err, DomainError::insufficient_stock(id.clone(), 10.0, 15.0));
        assert_eq!(ledger, before);
        assert_eq!(ledger.item(&id).unwrap().quantity(), 10.0);
    }

    #[test]
    fn withdrawing_everything_is_allowed() {
        let (mut ledger, ids, id) = ledger_with(10.0);
        ledger
            .record_movement(
                NewMovement::new(&id, MovementType::Withdrawal, 10.0, test_time().date_naive()),
                &ids,
                test_time(),
            )
            .unwrap();
        assert_eq!(ledger.item(&id).unwrap().quantity(), 0.0);
    }

    #[test]
    fn addition_then_adjustment_sets_absolute_quantity() {
        let (mut ledger, ids, id) = ledger_with(10.0);
        for (kind, q) in [(MovementType::Addition, 5.0), (MovementType::Adjustment, 3.0)] {
            ledger
                .record_movement(NewMovement::new(&id, kind, q, test_time().date_naive()), &ids, test_time())
                .unwrap();
        }
        assert_eq!(ledger.item(&id).unwrap().quantity(), 3.0);
    }

    #[test]
    fn unknown_item_is_rejected_without_writing() {
        let (mut ledger, ids, _) = ledger_with(10.0);
        let before = ledger.clone();

        let err = ledger
            .record_movement(
                NewMovement::new("INV-missing", MovementType::Addition, 1.0, test_time().date_naive()),
                &ids,
                test_time(),
            )
            .unwrap_err();

        assert_eq!(err, DomainError::item_not_found("INV-missing"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn movement_refreshes_updated_at_and_snapshots_name() {
        let (mut ledger, ids, id) = ledger_with(10.0);
        let later = ledger.item(&id).unwrap().created_at() + chrono::Duration::hours(1);

        let m = ledger
            .record_movement(
                NewMovement::new(&id, MovementType::Initial, 4.0, later.date_naive()).with_notes("recount marker"),
                &ids,
                later,
            )
            .unwrap();

        let item = ledger.item(&id).unwrap();
        assert_eq!(item.quantity(), 10.0);
        assert_eq!(item.updated_at(), later);
        assert_eq!(m.timestamp, later);
        assert_eq!(m.item_name, "Bolts");
        assert_eq!(m.notes.as_deref(), Some("recount marker"));
    }

    #[test]
    fn reconcile_flags_items_that_drifted_from_their_log() {
        let (mut ledger, ids, id) = ledger_with(10.0);
        ledger
            .record_movement(
                NewMovement::new(&id, MovementType::Addition, 2.5, test_time().date_naive()),
                &ids,
                test_time(),
            )
            .unwrap();
        assert_eq!(ledger.replay_quantity(&id), Some(12.5));
        assert!(ledger.reconcile().is_empty());

        // An item with no log at all cannot be reconciled.
        let (items, _) = ledger.clone().into_parts();
        let orphaned = InventoryLedger::new(items, vec![]);
        let report = orphaned.reconcile();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].replayed, None);
        assert_eq!(report[0].stored, 12.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any feasible sequence of additions and withdrawals,
        /// quantity == start + sum(additions) - sum(withdrawals).
        #[test]
        fn net_effect_of_additions_and_withdrawals(
            start in 0u32..1_000,
            steps in prop::collection::vec((any::<bool>(), 1u32..500), 0..30)
        ) {
            let (mut ledger, ids, id) = ledger_with(f64::from(start));
            let mut expected = f64::from(start);

            for (is_addition, q) in steps {
                let q = f64::from(q);
                let kind = if is_addition { MovementType::Addition } else { MovementType::Withdrawal };
                let result = ledger.record_movement(NewMovement::new(&id, kind, q, test_time().date_naive()), &ids, test_time());

                if kind == MovementType::Withdrawal && q > expected {
                    let is_insufficient = matches!(result, Err(DomainError::InsufficientStock { .. }));
                    prop_assert!(is_insufficient);
                } else {
                    prop_assert!(result.is_ok());
                    expected = kind.apply(expected, q);
                }
                prop_assert_eq!(ledger.item(&id).unwrap().quantity(), expected);
            }

            prop_assert_eq!(ledger.replay_quantity(&id), Some(expected));
        }

        /// Property: applying the same adjustment twice leaves the same quantity.
        #[test]
        fn adjustment_is_idempotent(start in 0u32..1_000, target in 0u32..1_000) {
            let (mut ledger, ids, id) = ledger_with(f64::from(start));
            for _ in 0..2 {
                ledger
                    .record_movement(
                        NewMovement::new(&id, MovementType::Adjustment, f64::from(target), test_time().date_naive()),
                        &ids,
                        test_time(),
                    )
                    .unwrap();
                prop_assert_eq!(ledger.item(&id).unwrap().quantity(), f64::from(target));
            }
        }
    }
}
