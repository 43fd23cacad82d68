//! Single composed interface for presentation layers.
//!
//! # Responsibility
//! - Expose the union of directory, salary and statistics operations behind
//!   one type.
//!
//! # Invariants
//! - Every call is a direct synchronous delegation; no added logic, caching
//!   or transactional grouping. Composite reads issue one store round-trip
//!   per underlying metric.

use crate::model::employee::{Employee, EmployeeId, Role};
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::employee_service::EmployeeService;
use crate::service::salary::SalaryCalculator;
use crate::service::statistics_service::StatisticsService;
use crate::service::ServiceResult;
use std::collections::HashMap;

/// Facade over the three employee services.
///
/// Built with plain constructor wiring; the store instance is shared by
/// value (`Clone`), which for the SQLite store is a copy of the connection
/// handle and for the memory store is a `&repo` reference.
pub struct StaffDesk<R: EmployeeRepository> {
    directory: EmployeeService<R>,
    statistics: StatisticsService<R>,
    salary: SalaryCalculator,
}

impl<R: EmployeeRepository> StaffDesk<R> {
    /// Wires the services around one shared store.
    pub fn new(repo: R) -> Self
    where
        R: Clone,
    {
        Self {
            directory: EmployeeService::new(repo.clone()),
            statistics: StatisticsService::new(repo),
            salary: SalaryCalculator::new(),
        }
    }

    // Directory operations.

    /// Adds a new employee; the store assigns the identity.
    pub fn add_employee(
        &self,
        name: impl Into<String>,
        experience_years: u32,
        role: Role,
    ) -> ServiceResult<Employee> {
        self.directory.add_employee(name, experience_years, role)
    }

    /// Returns the full snapshot in the store's natural order.
    pub fn employees(&self) -> ServiceResult<Vec<Employee>> {
        self.directory.employees()
    }

    /// Fetches one employee by identity, `None` when absent.
    pub fn employee(&self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        self.directory.employee(id)
    }

    /// Returns the snapshot element at `index`.
    pub fn employee_by_index(&self, index: usize) -> ServiceResult<Employee> {
        self.directory.employee_by_index(index)
    }

    /// Translates a screen row into a store identity.
    pub fn resolve_index(&self, index: usize) -> ServiceResult<EmployeeId> {
        self.directory.resolve_index(index)
    }

    /// Overwrites the mutable fields of the employee with `id`.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        name: impl Into<String>,
        role: Role,
        experience_years: u32,
    ) -> ServiceResult<Employee> {
        self.directory
            .update_employee(id, name, role, experience_years)
    }

    /// Index-addressed update over the current snapshot.
    pub fn update_employee_by_index(
        &self,
        index: usize,
        name: impl Into<String>,
        role: Role,
        experience_years: u32,
    ) -> ServiceResult<Employee> {
        self.directory
            .update_employee_by_index(index, name, role, experience_years)
    }

    /// Removes the employee with `id`.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        self.directory.delete_employee(id)
    }

    /// Index-addressed delete over the current snapshot.
    pub fn delete_employee_by_index(&self, index: usize) -> ServiceResult<Employee> {
        self.directory.delete_employee_by_index(index)
    }

    /// Filters the full snapshot by exact role match.
    pub fn employees_by_role(&self, role: Role) -> ServiceResult<Vec<Employee>> {
        self.directory.employees_by_role(role)
    }

    /// Increments the record's experience by exactly 1 and persists.
    pub fn add_work_experience(&self, employee: &mut Employee) -> ServiceResult<()> {
        self.directory.add_work_experience(employee)
    }

    // Salary operations.

    /// Calculates the salary for one employee.
    pub fn calculate_salary(&self, employee: &Employee) -> f64 {
        self.salary.salary_for(employee)
    }

    // Statistics operations.

    /// Total number of employees.
    pub fn total_employees(&self) -> ServiceResult<usize> {
        self.statistics.total_employees()
    }

    /// Mean experience, `0.0` on an empty set.
    pub fn average_experience(&self) -> ServiceResult<f64> {
        self.statistics.average_experience()
    }

    /// Employee count per occurring role.
    pub fn role_distribution(&self) -> ServiceResult<HashMap<Role, usize>> {
        self.statistics.role_distribution()
    }

    /// Most experienced employee, first-of-ties in snapshot order.
    pub fn most_experienced(&self) -> ServiceResult<Option<Employee>> {
        self.statistics.most_experienced()
    }

    /// Sum of calculated salaries over the snapshot.
    pub fn total_salary_budget(&self) -> ServiceResult<f64> {
        self.statistics.total_salary_budget()
    }
}
