use shopfloor_core::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use shopfloor_parties::{CUSTOMER_ID_PREFIX, Customer, NewCustomer, sample_customers};

use crate::collection::{Collection, keys};
use crate::error::ServiceResult;
use crate::repository::Repository;
use crate::store::KeyValueStore;

pub const CUSTOMERS: Collection<Customer> = Collection::new(keys::CUSTOMERS, "customer", sample_customers);

#[derive(Debug)]
pub struct CustomerService<S, G = UuidIdGenerator, C = SystemClock> {
    repo: Repository<Customer, S>,
    ids: G,
    clock: C,
}

impl<S: KeyValueStore> CustomerService<S> {
    pub fn new(store: S) -> Self {
        Self::with_parts(store, UuidIdGenerator, SystemClock)
    }
}

impl<S, G, C> CustomerService<S, G, C>
where
    S: KeyValueStore,
    G: IdGenerator,
    C: Clock,
{
    pub fn with_parts(store: S, ids: G, clock: C) -> Self {
        Self {
            repo: Repository::new(store, CUSTOMERS),
            ids,
            clock,
        }
    }

    pub fn list_customers(&self) -> ServiceResult<Vec<Customer>> {
        Ok(self.repo.list()?)
    }

    pub fn get_customer(&self, id: &str) -> ServiceResult<Option<Customer>> {
        Ok(self.repo.get(id)?)
    }

    pub fn add_customer(&self, input: NewCustomer) -> ServiceResult<Customer> {
        let customer = input.into_customer(self.ids.new_id(CUSTOMER_ID_PREFIX), self.clock.now())?;
        let customer = self.repo.insert(customer)?;
        tracing::info!(customer_id = %customer.id, "customer added");
        Ok(customer)
    }

    /// Replace the stored record that has `customer.id`. `createdAt` is kept
    /// from the stored record.
    pub fn update_customer(&self, customer: Customer) -> ServiceResult<Customer> {
        let id = customer.id.clone();
        let updated = self.repo.update_with(&id, move |current| {
            let next = Customer {
                created_at: current.created_at,
                ..customer
            };
            next.validate()?;
            Ok(next)
        })?;
        tracing::info!(customer_id = %updated.id, "customer updated");
        Ok(updated)
    }

    pub fn delete_customer(&self, id: &str) -> ServiceResult<bool> {
        let removed = self.repo.remove(id)?;
        if removed {
            tracing::info!(customer_id = id, "customer deleted");
        }
        Ok(removed)
    }
}
