//! In-memory employee store.
//!
//! # Responsibility
//! - Back the store contract with an in-process ordered container, for tests
//!   and embedded use without a database file.
//!
//! # Invariants
//! - Identities are assigned from a monotonic counter and never reused.
//! - Natural order is insertion order, matching the SQLite store's
//!   ascending-id order.

use super::employee_repo::{EmployeeRepository, RepoError, RepoResult};
use crate::model::employee::{Employee, EmployeeId};
use std::cell::RefCell;

/// Ordered in-process store; the single-client model needs no locking.
#[derive(Debug, Default)]
pub struct MemoryEmployeeRepository {
    state: RefCell<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: EmployeeId,
    rows: Vec<Employee>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for MemoryEmployeeRepository {
    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        let mut state = self.state.borrow_mut();
        state.last_id += 1;
        let id = state.last_id;

        let mut stored = employee.clone();
        stored.id = id;
        state.rows.push(stored);

        Ok(id)
    }

    fn update(&self, employee: &Employee) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        match state.rows.iter_mut().find(|row| row.id == employee.id) {
            Some(row) => {
                *row = employee.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(employee.id)),
        }
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        match state.rows.iter().position(|row| row.id == id) {
            Some(index) => {
                state.rows.remove(index);
                Ok(())
            }
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn get_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let state = self.state.borrow();
        Ok(state.rows.iter().find(|row| row.id == id).cloned())
    }

    fn get_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.state.borrow().rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryEmployeeRepository;
    use crate::model::employee::{Employee, Role};
    use crate::repo::employee_repo::{EmployeeRepository, RepoError};

    #[test]
    fn insert_assigns_monotonic_ids() {
        let repo = MemoryEmployeeRepository::new();

        let first = repo.insert(&Employee::new("Ann", 3, Role::Head)).unwrap();
        let second = repo.insert(&Employee::new("Bob", 1, Role::Intern)).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let repo = MemoryEmployeeRepository::new();

        let first = repo.insert(&Employee::new("Ann", 3, Role::Head)).unwrap();
        repo.delete(first).unwrap();
        let second = repo.insert(&Employee::new("Bob", 1, Role::Intern)).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn update_missing_returns_not_found() {
        let repo = MemoryEmployeeRepository::new();

        let ghost = Employee::with_id(42, "Ghost", 5, Role::Manager);
        let err = repo.update(&ghost).unwrap_err();
        assert!(matches!(err, RepoError::NotFound(42)));
    }
}
