//! Sample employees written on first use of an empty store.

use chrono::NaiveDate;

use crate::employee::{Employee, EmployeeStatus};

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    position: &str,
    department: &str,
    email: &str,
    phone: &str,
    hired: (i32, u32, u32),
    skills: &[&str],
) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        position: position.into(),
        department: department.into(),
        email: email.into(),
        phone: Some(phone.into()),
        hire_date: NaiveDate::from_ymd_opt(hired.0, hired.1, hired.2),
        status: EmployeeStatus::Active,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "John Smith",
            "Production Manager",
            "Production",
            "john.smith@example.com",
            "555-123-4567",
            (2020, 5, 15),
            &["Leadership", "Process Optimization", "Quality Control"],
        ),
        employee(
            "2",
            "Sarah Johnson",
            "Quality Assurance Specialist",
            "Quality Control",
            "sarah.j@example.com",
            "555-987-6543",
            (2021, 2, 10),
            &["Testing", "Documentation", "Regulatory Compliance"],
        ),
        employee(
            "3",
            "Michael Chen",
            "Machine Operator",
            "Production",
            "mchen@example.com",
            "555-789-0123",
            (2019, 11, 22),
            &["CNC Operation", "Maintenance", "Safety Protocols"],
        ),
        employee(
            "4",
            "Lisa Rodriguez",
            "Inventory Specialist",
            "Inventory",
            "lrodriguez@example.com",
            "555-456-7890",
            (2022, 1, 5),
            &["Inventory Management", "Supply Chain", "Data Entry"],
        ),
    ]
}
