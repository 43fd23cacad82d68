//! Employee store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `employees` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert` assigns the identity; caller-provided ids are ignored.
//! - Zero-changed-rows on `update`/`delete` surfaces as `NotFound`.
//! - `get_all` returns the store's natural order (ascending id).

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, Role};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, role, experience_years FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure surfaced by employee stores.
#[derive(Debug)]
pub enum RepoError {
    /// Storage transport or bootstrap failure.
    Db(DbError),
    /// The addressed identity does not exist in the store.
    NotFound(EmployeeId),
    /// Persisted state violates the domain contract.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract for employee records.
///
/// Implementations own the authoritative record; services operate on
/// snapshots fetched per call.
pub trait EmployeeRepository {
    /// Persists a new record and returns the store-assigned identity.
    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId>;
    /// Overwrites the record matched by `employee.id`.
    fn update(&self, employee: &Employee) -> RepoResult<()>;
    /// Removes the record with the given identity.
    fn delete(&self, id: EmployeeId) -> RepoResult<()>;
    /// Fetches one record, `None` when absent.
    fn get_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Fetches the full snapshot in the store's natural order.
    fn get_all(&self) -> RepoResult<Vec<Employee>>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &R {
    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        (**self).insert(employee)
    }

    fn update(&self, employee: &Employee) -> RepoResult<()> {
        (**self).update(employee)
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn get_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> RepoResult<Vec<Employee>> {
        (**self).get_all()
    }
}

/// SQLite-backed employee store.
#[derive(Clone, Copy)]
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO employees (name, role, experience_years) VALUES (?1, ?2, ?3);",
            params![
                employee.name.as_str(),
                role_to_db(employee.role),
                i64::from(employee.experience_years),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, employee: &Employee) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET name = ?1, role = ?2, experience_years = ?3
             WHERE id = ?4;",
            params![
                employee.name.as_str(),
                role_to_db(employee.role),
                i64::from(employee.experience_years),
                employee.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(employee.id));
        }

        Ok(())
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn get_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let role_value: i64 = row.get("role")?;
    let role = parse_role(role_value).ok_or_else(|| {
        RepoError::InvalidData(format!("unknown role value `{role_value}` in employees.role"))
    })?;

    let experience_value: i64 = row.get("experience_years")?;
    let experience_years = u32::try_from(experience_value).map_err(|_| {
        RepoError::InvalidData(format!(
            "experience value `{experience_value}` in employees.experience_years is out of range"
        ))
    })?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        experience_years,
        role,
    })
}

fn role_to_db(role: Role) -> i64 {
    match role {
        Role::Head => 0,
        Role::Intern => 1,
        Role::Manager => 2,
    }
}

fn parse_role(value: i64) -> Option<Role> {
    match value {
        0 => Some(Role::Head),
        1 => Some(Role::Intern),
        2 => Some(Role::Manager),
        _ => None,
    }
}
