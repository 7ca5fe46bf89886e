use std::collections::BTreeMap;

use serde::Serialize;

use shopfloor_parties::Customer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

pub fn customer_report(customers: &[Customer]) -> CustomerReport {
    let mut by_status = BTreeMap::new();
    let mut by_type = BTreeMap::new();
    for c in customers {
        *by_status.entry(c.status.as_str().to_string()).or_insert(0) += 1;
        *by_type.entry(c.kind.as_str().to_string()).or_insert(0) += 1;
    }
    CustomerReport {
        total: customers.len(),
        by_status,
        by_type,
    }
}
