//! Aggregate read-only queries over the employee set.
//!
//! # Responsibility
//! - Compute count, averages, distribution, maximum and payroll totals.
//!
//! # Invariants
//! - Every query reads a fresh full snapshot; nothing is cached.
//! - Empty-set aggregates degrade to zero/absent instead of erroring.

use crate::model::employee::{Employee, Role};
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::salary::SalaryCalculator;
use crate::service::ServiceResult;
use std::collections::HashMap;

/// Read-only statistics over a store snapshot.
pub struct StatisticsService<R: EmployeeRepository> {
    repo: R,
    salary: SalaryCalculator,
}

impl<R: EmployeeRepository> StatisticsService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            salary: SalaryCalculator::new(),
        }
    }

    /// Total number of employees.
    pub fn total_employees(&self) -> ServiceResult<usize> {
        Ok(self.repo.get_all()?.len())
    }

    /// Mean of `experience_years`, `0.0` when the set is empty.
    pub fn average_experience(&self) -> ServiceResult<f64> {
        let employees = self.repo.get_all()?;
        if employees.is_empty() {
            return Ok(0.0);
        }

        let total: u64 = employees
            .iter()
            .map(|employee| u64::from(employee.experience_years))
            .sum();
        Ok(total as f64 / employees.len() as f64)
    }

    /// Employee count per role; only roles that occur are present.
    pub fn role_distribution(&self) -> ServiceResult<HashMap<Role, usize>> {
        let mut distribution = HashMap::new();
        for employee in self.repo.get_all()? {
            *distribution.entry(employee.role).or_insert(0) += 1;
        }
        Ok(distribution)
    }

    /// Employee with the most experience years, `None` on an empty set.
    ///
    /// Ties keep the first record in snapshot order, so the scan replaces
    /// the candidate only on strictly greater experience.
    pub fn most_experienced(&self) -> ServiceResult<Option<Employee>> {
        let mut best: Option<Employee> = None;
        for employee in self.repo.get_all()? {
            let is_better = best
                .as_ref()
                .map_or(true, |current| employee.experience_years > current.experience_years);
            if is_better {
                best = Some(employee);
            }
        }
        Ok(best)
    }

    /// Sum of calculated salaries over the snapshot, `0.0` when empty.
    pub fn total_salary_budget(&self) -> ServiceResult<f64> {
        let employees = self.repo.get_all()?;
        Ok(employees
            .iter()
            .map(|employee| self.salary.salary_for(employee))
            .sum())
    }
}
