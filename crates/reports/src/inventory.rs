//! Inventory valuation: quantity × unit cost, per item and per category.

use std::collections::BTreeMap;

use serde::Serialize;

use shopfloor_core::Entity;
use shopfloor_inventory::StockItem;
use shopfloor_inventory::query::low_stock;

const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStock {
    pub category: String,
    pub items: usize,
    pub quantity: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemValue {
    pub item_id: String,
    pub name: String,
    pub quantity: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub total_items: usize,
    /// Items without a unit cost contribute zero.
    pub total_value: f64,
    /// Sorted by category name.
    pub categories: Vec<CategoryStock>,
    pub low_stock: Vec<ItemValue>,
    /// Highest stock value first.
    pub top_items: Vec<ItemValue>,
}

fn item_value(item: &StockItem) -> ItemValue {
    ItemValue {
        item_id: item.id().to_string(),
        name: item.name().to_string(),
        quantity: item.quantity(),
        value: item.stock_value(),
    }
}

pub fn inventory_report(items: &[StockItem], top: usize) -> InventoryReport {
    let mut by_category: BTreeMap<String, CategoryStock> = BTreeMap::new();
    for item in items {
        let name = item
            .category()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
            .to_string();
        let entry = by_category.entry(name.clone()).or_insert_with(|| CategoryStock {
            category: name,
            items: 0,
            quantity: 0.0,
            value: 0.0,
        });
        entry.items += 1;
        entry.quantity += item.quantity();
        entry.value += item.stock_value();
    }

    let mut top_items: Vec<ItemValue> = items.iter().map(item_value).collect();
    top_items.sort_by(|a, b| b.value.total_cmp(&a.value));
    top_items.truncate(top);

    InventoryReport {
        total_items: items.len(),
        total_value: items.iter().map(StockItem::stock_value).sum(),
        categories: by_category.into_values().collect(),
        low_stock: low_stock(items).iter().map(item_value).collect(),
        top_items,
    }
}
