//! Parties domain module: the customers production orders are built for.

pub mod customer;

pub use customer::{ContactInfo, Customer, CustomerStatus, CustomerType, NewCustomer, sample_customers};

/// Prefix for customer ids.
pub const CUSTOMER_ID_PREFIX: &str = "CUST";
