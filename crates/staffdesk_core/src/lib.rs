//! Core domain logic for the staffdesk employee directory.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod facade;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use facade::StaffDesk;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, Role};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use repo::memory_repo::MemoryEmployeeRepository;
pub use service::employee_service::EmployeeService;
pub use service::salary::{SalaryCalculator, BASE_RATE};
pub use service::statistics_service::StatisticsService;
pub use service::{ServiceError, ServiceResult};
pub use validation::{
    validate_employee_input, validate_experience, validate_name, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
