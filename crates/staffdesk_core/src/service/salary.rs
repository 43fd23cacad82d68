//! Salary calculation.
//!
//! # Responsibility
//! - Map (role, experience) to a monetary amount.
//!
//! # Invariants
//! - Pure and total: no side effects, no failure modes.

use crate::model::employee::{Employee, Role};

/// Monthly base rate one experience year is worth before the role
/// multiplier.
pub const BASE_RATE: f64 = 10_000.0;

/// Stateless salary formula over the closed role set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Role coefficient applied on top of [`BASE_RATE`].
    pub fn multiplier(&self, role: Role) -> f64 {
        match role {
            Role::Head => 1.5,
            Role::Manager => 1.25,
            Role::Intern => 1.1,
        }
    }

    /// `experience_years * multiplier(role) * BASE_RATE`.
    pub fn salary_for(&self, employee: &Employee) -> f64 {
        f64::from(employee.experience_years) * self.multiplier(employee.role) * BASE_RATE
    }
}
