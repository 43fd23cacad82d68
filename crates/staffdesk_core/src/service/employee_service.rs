//! Employee directory service.
//!
//! # Responsibility
//! - Provide CRUD, filter and increment-experience entry points over the
//!   employee store.
//! - Translate presentation-level positional indices into store identities.
//!
//! # Invariants
//! - Store-assigned `id` is the primary addressing key; positional indices
//!   are resolved against a fresh snapshot inside the call and are not
//!   stable across mutations.
//! - No input validation happens here; the directory persists what it is
//!   given (screening lives in `crate::validation` for boundary callers).

use crate::model::employee::{Employee, EmployeeId, Role};
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Directory of employees backed by a store implementation.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a directory using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new employee; the store assigns the identity.
    pub fn add_employee(
        &self,
        name: impl Into<String>,
        experience_years: u32,
        role: Role,
    ) -> ServiceResult<Employee> {
        let mut employee = Employee::new(name, experience_years, role);
        employee.id = self.repo.insert(&employee)?;

        info!(
            "event=employee_add module=directory status=ok id={} role={}",
            employee.id, employee.role
        );
        Ok(employee)
    }

    /// Returns the full snapshot in the store's natural order.
    pub fn employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.get_all()?)
    }

    /// Returns the snapshot element at `index`.
    pub fn employee_by_index(&self, index: usize) -> ServiceResult<Employee> {
        let mut employees = self.repo.get_all()?;
        let count = employees.len();
        if index >= count {
            return Err(ServiceError::IndexOutOfRange { index, count });
        }
        Ok(employees.swap_remove(index))
    }

    /// Translates "row N on screen" into a store identity, once per user
    /// action.
    pub fn resolve_index(&self, index: usize) -> ServiceResult<EmployeeId> {
        self.employee_by_index(index).map(|employee| employee.id)
    }

    /// Overwrites the three mutable fields of the employee with `id`.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        name: impl Into<String>,
        role: Role,
        experience_years: u32,
    ) -> ServiceResult<Employee> {
        let employee = Employee::with_id(id, name, experience_years, role);
        self.repo.update(&employee)?;

        info!("event=employee_update module=directory status=ok id={id}");
        Ok(employee)
    }

    /// Index-addressed form of [`Self::update_employee`].
    ///
    /// Resolves `index` against the current snapshot, then updates by id.
    pub fn update_employee_by_index(
        &self,
        index: usize,
        name: impl Into<String>,
        role: Role,
        experience_years: u32,
    ) -> ServiceResult<Employee> {
        let id = self.resolve_index(index)?;
        self.update_employee(id, name, role, experience_years)
    }

    /// Removes the employee with `id`.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        self.repo.delete(id)?;

        info!("event=employee_delete module=directory status=ok id={id}");
        Ok(())
    }

    /// Index-addressed form of [`Self::delete_employee`].
    ///
    /// Returns the removed record.
    pub fn delete_employee_by_index(&self, index: usize) -> ServiceResult<Employee> {
        let employee = self.employee_by_index(index)?;
        self.delete_employee(employee.id)?;
        Ok(employee)
    }

    /// Filters the full snapshot by exact role match.
    pub fn employees_by_role(&self, role: Role) -> ServiceResult<Vec<Employee>> {
        let mut employees = self.repo.get_all()?;
        employees.retain(|employee| employee.role == role);
        Ok(employees)
    }

    /// Increments `experience_years` by exactly 1 and persists.
    ///
    /// Operates on the caller-supplied record; the caller is responsible for
    /// holding a current reference. A stale id surfaces as `NotFound`.
    pub fn add_work_experience(&self, employee: &mut Employee) -> ServiceResult<()> {
        employee.experience_years += 1;
        self.repo.update(employee)?;

        info!(
            "event=employee_experience module=directory status=ok id={} years={}",
            employee.id, employee.experience_years
        );
        Ok(())
    }

    /// Fetches one employee by identity, `None` when absent.
    pub fn employee(&self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.get_by_id(id)?)
    }
}
