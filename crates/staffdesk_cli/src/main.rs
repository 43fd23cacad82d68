//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use staffdesk_core::db::open_db_in_memory;
use staffdesk_core::{Role, SqliteEmployeeRepository, StaffDesk};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("staffdesk_core version={}", staffdesk_core::core_version());

    let conn = open_db_in_memory()?;
    let desk = StaffDesk::new(SqliteEmployeeRepository::new(&conn));

    let employee = desk.add_employee("Smoke Probe", 10, Role::Head)?;
    println!("employee={employee}");
    println!("headcount={}", desk.total_employees()?);
    println!("salary={}", desk.calculate_salary(&employee));

    Ok(())
}
