//! Input screening for presentation callers.
//!
//! # Responsibility
//! - Check user-supplied name/experience input before it reaches the
//!   directory service.
//!
//! # Invariants
//! - The directory itself performs no validation; these helpers are opt-in
//!   for boundary callers, and `validate_employee_input` reports every
//!   violation at once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Letters (latin or cyrillic), spaces and hyphens.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s\-]+$").expect("valid name regex"));

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

pub type ValidationResult = Result<(), ValidationError>;

/// Rejected employee input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    NameTooShort { chars: usize },
    NameTooLong { chars: usize },
    NameInvalidChars,
    ExperienceTooHigh { years: u32 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::NameTooShort { chars } => write!(
                f,
                "name must contain at least {MIN_NAME_CHARS} characters, got {chars}"
            ),
            Self::NameTooLong { chars } => write!(
                f,
                "name cannot exceed {MAX_NAME_CHARS} characters, got {chars}"
            ),
            Self::NameInvalidChars => {
                write!(f, "name may contain only letters, spaces and hyphens")
            }
            Self::ExperienceTooHigh { years } => write!(
                f,
                "work experience cannot exceed {MAX_EXPERIENCE_YEARS} years, got {years}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Checks an employee name against the boundary rules.
pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let chars = trimmed.chars().count();
    if chars < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort { chars });
    }
    if chars > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong { chars });
    }

    if !NAME_RE.is_match(trimmed) {
        return Err(ValidationError::NameInvalidChars);
    }

    Ok(())
}

/// Checks work experience against the boundary rules.
///
/// Negative experience is unrepresentable; only the upper bound remains.
pub fn validate_experience(years: u32) -> ValidationResult {
    if years > MAX_EXPERIENCE_YEARS {
        return Err(ValidationError::ExperienceTooHigh { years });
    }
    Ok(())
}

/// Runs every check and collects all violations.
pub fn validate_employee_input(name: &str, years: u32) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(err) = validate_name(name) {
        errors.push(err);
    }
    if let Err(err) = validate_experience(years) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
