//! Workforce records.

pub mod employee;
pub mod seed;

pub use employee::{Employee, EmployeeQuery, EmployeeStatus, NewEmployee, departments};

/// Prefix for employee ids.
pub const EMPLOYEE_ID_PREFIX: &str = "EMP";
