//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the employee store contract consumed by the service layer.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod employee_repo;
pub mod memory_repo;
