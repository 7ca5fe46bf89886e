use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, Entity, require_text};

/// Kind of customer organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CustomerType {
    #[default]
    Corporate,
    #[serde(rename = "Small Business")]
    SmallBusiness,
    Individual,
    Government,
    #[serde(rename = "Non-profit")]
    NonProfit,
}

impl CustomerType {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerType::Corporate => "Corporate",
            CustomerType::SmallBusiness => "Small Business",
            CustomerType::Individual => "Individual",
            CustomerType::Government => "Government",
            CustomerType::NonProfit => "Non-profit",
        }
    }
}

/// Customer relationship status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Prospect,
    Former,
}

impl CustomerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Prospect => "Prospect",
            CustomerStatus::Former => "Former",
        }
    }
}

/// Contact information for a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn validate(&self) -> DomainResult<()> {
        require_text("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(DomainError::validation("email is invalid"));
        }
        require_text("phone", &self.phone)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(rename = "type", default)]
    pub kind: CustomerType,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Customer {
    pub fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        self.contact.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(rename = "type", default)]
    pub kind: CustomerType,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewCustomer {
    pub fn into_customer(self, id: String, now: DateTime<Utc>) -> DomainResult<Customer> {
        let customer = Customer {
            id,
            name: self.name,
            contact_person: self.contact_person,
            contact: self.contact,
            kind: self.kind,
            status: self.status,
            notes: self.notes,
            created_at: now,
        };
        customer.validate()?;
        Ok(customer)
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    contact_person: &str,
    contact: (&str, &str, &str),
    kind: CustomerType,
    status: CustomerStatus,
    notes: &str,
    created: (i32, u32, u32),
) -> Customer {
    Customer {
        id: id.into(),
        name: name.into(),
        contact_person: Some(contact_person.into()),
        contact: ContactInfo {
            email: contact.0.into(),
            phone: contact.1.into(),
            address: Some(contact.2.into()),
        },
        kind,
        status,
        notes: Some(notes.into()),
        created_at: Utc
            .with_ymd_and_hms(created.0, created.1, created.2, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Customers written on first use of an empty store.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        sample(
            "1",
            "Acme Corporation",
            "John Smith",
            ("john.smith@acmecorp.com", "(555) 123-4567", "123 Business Ave, Industry City, 90210"),
            CustomerType::Corporate,
            CustomerStatus::Active,
            "Major client for industrial equipment",
            (2023, 1, 15),
        ),
        sample(
            "2",
            "TechSolutions Inc.",
            "Sarah Johnson",
            ("sarah@techsolutions.com", "(555) 987-6543", "456 Innovation Drive, Tech City, 90211"),
            CustomerType::Corporate,
            CustomerStatus::Active,
            "Regular orders for custom electronics",
            (2023, 3, 20),
        ),
        sample(
            "3",
            "Green Valley Farms",
            "Michael Chen",
            ("michael@greenvalley.com", "(555) 456-7890", "789 Rural Route, Farmington, 90212"),
            CustomerType::SmallBusiness,
            CustomerStatus::Inactive,
            "Seasonal client for agricultural equipment",
            (2023, 5, 10),
        ),
    ]
}
