use shopfloor_core::{IdGenerator, UuidIdGenerator};
use shopfloor_workforce::seed::sample_employees;
use shopfloor_workforce::{EMPLOYEE_ID_PREFIX, Employee, EmployeeQuery, NewEmployee, departments};

use crate::collection::{Collection, keys};
use crate::error::ServiceResult;
use crate::repository::Repository;
use crate::store::KeyValueStore;

pub const EMPLOYEES: Collection<Employee> = Collection::new(keys::EMPLOYEES, "employee", sample_employees);

#[derive(Debug)]
pub struct WorkforceService<S, G = UuidIdGenerator> {
    repo: Repository<Employee, S>,
    ids: G,
}

impl<S: KeyValueStore> WorkforceService<S> {
    pub fn new(store: S) -> Self {
        Self::with_ids(store, UuidIdGenerator)
    }
}

impl<S, G> WorkforceService<S, G>
where
    S: KeyValueStore,
    G: IdGenerator,
{
    pub fn with_ids(store: S, ids: G) -> Self {
        Self {
            repo: Repository::new(store, EMPLOYEES),
            ids,
        }
    }

    pub fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.list()?)
    }

    pub fn get_employee(&self, id: &str) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.get(id)?)
    }

    pub fn query_employees(&self, query: &EmployeeQuery) -> ServiceResult<Vec<Employee>> {
        Ok(query.run(&self.repo.list()?))
    }

    pub fn departments(&self) -> ServiceResult<Vec<String>> {
        Ok(departments(&self.repo.list()?))
    }

    pub fn add_employee(&self, input: NewEmployee) -> ServiceResult<Employee> {
        let employee = input.into_employee(self.ids.new_id(EMPLOYEE_ID_PREFIX))?;
        let employee = self.repo.insert(employee)?;
        tracing::info!(employee_id = %employee.id, department = %employee.department, "employee added");
        Ok(employee)
    }

    /// Replace the stored record that has `employee.id`.
    pub fn update_employee(&self, employee: Employee) -> ServiceResult<Employee> {
        let id = employee.id.clone();
        let updated = self.repo.update_with(&id, move |_| {
            employee.validate()?;
            Ok(employee)
        })?;
        tracing::info!(employee_id = %updated.id, status = %updated.status, "employee updated");
        Ok(updated)
    }

    pub fn delete_employee(&self, id: &str) -> ServiceResult<bool> {
        let removed = self.repo.remove(id)?;
        if removed {
            tracing::info!(employee_id = id, "employee deleted");
        }
        Ok(removed)
    }
}
