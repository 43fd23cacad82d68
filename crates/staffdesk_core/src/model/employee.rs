//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record shared by directory, salary and
//!   statistics services.
//! - Fix the closed role set and its integer wire values.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes afterwards.
//! - `experience_years` cannot go negative (unsigned by construction).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned identifier with autoincrement semantics.
///
/// `0` marks a record that has not been persisted yet.
pub type EmployeeId = i64;

/// Closed set of job categories used for salary multipliers and filtering.
///
/// Declaration order fixes the integer wire values (0/1/2) persisted in the
/// `employees.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Department head.
    Head,
    /// Trainee position.
    Intern,
    /// Line manager.
    Manager,
}

impl Role {
    /// All roles in wire-value order.
    pub const ALL: [Role; 3] = [Role::Head, Role::Intern, Role::Manager];
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Head => "Head",
            Self::Intern => "Intern",
            Self::Manager => "Manager",
        };
        write!(f, "{label}")
    }
}

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identity; `0` before the first insert.
    pub id: EmployeeId,
    /// Non-empty display name.
    pub name: String,
    /// Whole years of work experience.
    pub experience_years: u32,
    /// Job category.
    pub role: Role,
}

impl Employee {
    /// Creates a not-yet-persisted employee; the store assigns the id.
    pub fn new(name: impl Into<String>, experience_years: u32, role: Role) -> Self {
        Self::with_id(0, name, experience_years, role)
    }

    /// Creates an employee with a known identity.
    ///
    /// Used by store read paths and tests where identity already exists.
    pub fn with_id(
        id: EmployeeId,
        name: impl Into<String>,
        experience_years: u32,
        role: Role,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            experience_years,
            role,
        }
    }

    /// Returns whether the store has assigned an identity to this record.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({}, {} yrs)",
            self.id, self.name, self.role, self.experience_years
        )
    }
}
