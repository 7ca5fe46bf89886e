use std::collections::BTreeMap;

use serde::Serialize;

use shopfloor_workforce::Employee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceReport {
    pub head_count: usize,
    pub by_department: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

pub fn workforce_report(employees: &[Employee]) -> WorkforceReport {
    let mut by_department = BTreeMap::new();
    let mut by_status = BTreeMap::new();
    for e in employees {
        *by_department.entry(e.department.clone()).or_insert(0) += 1;
        *by_status.entry(e.status.as_str().to_string()).or_insert(0) += 1;
    }
    WorkforceReport {
        head_count: employees.len(),
        by_department,
        by_status,
    }
}
