//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - Services never catch-and-suppress; every failure propagates to the
//!   caller.

use crate::repo::employee_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod employee_service;
pub mod salary;
pub mod statistics_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure surfaced by the service layer.
#[derive(Debug)]
pub enum ServiceError {
    /// A positional operation received an index outside `[0, count)`.
    IndexOutOfRange { index: usize, count: usize },
    /// Persistence-layer failure, propagated unchanged.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, count } => {
                write!(f, "index {index} is out of range for {count} employees")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
