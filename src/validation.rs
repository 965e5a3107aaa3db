//! Input validation for scheduling runs.
//!
//! Checks the process set and policy parameters before any simulation
//! starts. Detects:
//! - Duplicate process IDs
//! - Empty process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quanta
//! - Process sets whose schedule would run past `i64::MAX`
//!
//! A run either passes validation and completes deterministically, or is
//! rejected here. Nothing is checked mid-simulation except internal
//! invariants, which panic.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// A Round Robin quantum is `<= 0`.
    InvalidQuantum,
    /// The simulated clock would exceed `i64::MAX` before every process
    /// finishes.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. Every spec satisfies its field invariants (see [`ProcessSpec::check`])
/// 2. No duplicate process IDs
/// 3. The latest arrival plus the total burst fits in `i64`, which bounds
///    every clock value any policy reaches
///
/// Specs built through [`ProcessSpec::new`] already pass check 1; specs
/// deserialized or constructed literally may not.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_specs(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for spec in specs {
        if let Err(e) = spec.check() {
            errors.push(e);
        }
        if !ids.insert(spec.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", spec.id),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(specs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the clock: the latest arrival plus every burst.
/// `None` on overflow.
fn schedule_horizon(specs: &[ProcessSpec]) -> Option<i64> {
    let latest = specs.iter().map(|s| s.arrival_time).max().unwrap_or(0);
    specs
        .iter()
        .try_fold(latest, |acc, s| acc.checked_add(s.burst_time))
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Round Robin quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}
