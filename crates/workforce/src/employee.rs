use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, Entity, require_text};

/// Employment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[default]
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "on leave")]
    OnLeave,
    #[serde(rename = "terminated")]
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::OnLeave => "on leave",
            EmployeeStatus::Terminated => "terminated",
        }
    }
}

impl core::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for EmployeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EmployeeStatus::Active),
            "on leave" => Ok(EmployeeStatus::OnLeave),
            "terminated" => Ok(EmployeeStatus::Terminated),
            other => Err(DomainError::validation(format!("unknown employee status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Entity for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Employee {
    pub fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        require_text("position", &self.position)?;
        require_text("department", &self.department)?;
        require_text("email", &self.email)?;
        Ok(())
    }
}

/// Input for hiring; status and skills default when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl NewEmployee {
    pub fn into_employee(self, id: String) -> DomainResult<Employee> {
        let employee = Employee {
            id,
            name: self.name,
            position: self.position,
            department: self.department,
            email: self.email,
            phone: self.phone,
            hire_date: self.hire_date,
            status: self.status.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
        };
        employee.validate()?;
        Ok(employee)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    /// Case-insensitive substring over name, position, email.
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeQuery {
    pub fn matches(&self, e: &Employee) -> bool {
        if self.department.as_deref().is_some_and(|d| d != e.department) {
            return false;
        }
        if self.status.is_some_and(|s| s != e.status) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                [&e.name, &e.position, &e.email]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&term))
            }
        }
    }

    pub fn run(&self, employees: &[Employee]) -> Vec<Employee> {
        employees.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Distinct departments, sorted.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
