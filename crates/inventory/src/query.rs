//! Read-side helpers for the inventory views: filter, search, sort.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, Entity};

use crate::item::StockItem;
use crate::movement::StockMovement;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Category,
    Quantity,
    Cost,
}

impl core::str::FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "quantity" => Ok(SortField::Quantity),
            "cost" => Ok(SortField::Cost),
            other => Err(DomainError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Item list query. An empty query returns every item sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring over name, description, supplier and id.
    pub search: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl ItemQuery {
    pub fn matches(&self, item: &StockItem) -> bool {
        if let Some(category) = &self.category {
            if item.category() != Some(category.as_str()) {
                return false;
            }
        }

        let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        let hit = |s: Option<&str>| s.is_some_and(|s| s.to_lowercase().contains(&term));

        hit(Some(item.name()))
            || hit(item.description())
            || hit(item.supplier())
            || hit(Some(item.id()))
    }

    fn compare(&self, a: &StockItem, b: &StockItem) -> Ordering {
        let ord = match self.sort {
            SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortField::Category => a
                .category()
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&b.category().unwrap_or_default().to_lowercase()),
            SortField::Quantity => a.quantity().total_cmp(&b.quantity()),
            SortField::Cost => a.cost().unwrap_or(0.0).total_cmp(&b.cost().unwrap_or(0.0)),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    /// Apply filter + sort.
    pub fn run(&self, items: &[StockItem]) -> Vec<StockItem> {
        let mut out: Vec<StockItem> = items.iter().filter(|i| self.matches(i)).cloned().collect();
        out.sort_by(|a, b| self.compare(a, b));
        out
    }
}

/// Distinct, sorted, non-empty categories.
pub fn categories(items: &[StockItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|i| i.category())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Items at or below their reorder point.
pub fn low_stock(items: &[StockItem]) -> Vec<StockItem> {
    items.iter().filter(|i| i.is_low_stock()).cloned().collect()
}

/// Movement history for one item, newest first by system timestamp.
pub fn history_for(movements: &[StockMovement], item_id: &str) -> Vec<StockMovement> {
    let mut out: Vec<StockMovement> = movements.iter().filter(|m| m.item_id == item_id).cloned().collect();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}

/// Entire log, newest first.
pub fn recent_movements(movements: &[StockMovement]) -> Vec<StockMovement> {
    let mut out = movements.to_vec();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}
