//! Process model.
//!
//! A [`ProcessSpec`] is the immutable input description of a process
//! (identifier, arrival, burst). A [`ProcessRecord`] is the mutable
//! timing state one policy run keeps for that process.
//!
//! # Time Representation
//! All times are integer ticks of a logical clock starting at t=0.
//! No wall-clock time is involved.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// Immutable description of a process to be scheduled.
///
/// Deserialization runs the same checks as [`ProcessSpec::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProcessSpec")]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total processor time required.
    pub burst_time: i64,
}

impl ProcessSpec {
    /// Creates a validated process spec.
    ///
    /// Rejects an empty id, a negative arrival time and a non-positive burst.
    pub fn new(
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
    ) -> Result<Self, ValidationError> {
        let spec = Self {
            id: id.into(),
            arrival_time,
            burst_time,
        };
        spec.check()?;
        Ok(spec)
    }

    /// Checks the field-level invariants of this spec.
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID must not be empty",
            ));
        }
        if self.arrival_time < 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    self.id, self.arrival_time
                ),
            ));
        }
        if self.burst_time <= 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    self.id, self.burst_time
                ),
            ));
        }
        if self.arrival_time.checked_add(self.burst_time).is_none() {
            return Err(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!(
                    "Process '{}' cannot finish before the clock overflows (arrival {}, burst {})",
                    self.id, self.arrival_time, self.burst_time
                ),
            ));
        }
        Ok(())
    }
}

/// Unchecked wire form of [`ProcessSpec`].
#[derive(Deserialize)]
struct RawProcessSpec {
    id: String,
    arrival_time: i64,
    burst_time: i64,
}

impl TryFrom<RawProcessSpec> for ProcessSpec {
    type Error = ValidationError;

    fn try_from(raw: RawProcessSpec) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.arrival_time, raw.burst_time)
    }
}

/// Timing state of one process within a single policy run.
///
/// Created fresh from a [`ProcessSpec`] for every run; records are never
/// shared between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier (stable across policies).
    pub id: String,
    /// Arrival time (fixed).
    pub arrival_time: i64,
    /// Burst time (fixed).
    pub burst_time: i64,
    /// Execution still owed. Reaches 0 exactly once.
    pub remaining_time: i64,
    /// Dispatch time, per the run's start-time semantics.
    pub start_time: Option<i64>,
    /// Time at which `remaining_time` reached 0.
    pub finish_time: Option<i64>,
    /// `start_time - arrival_time`, set on completion.
    pub waiting_time: i64,
    /// `finish_time - arrival_time`, set on completion.
    pub turnaround_time: i64,
}

impl ProcessRecord {
    /// Creates a fresh record with all derived fields reset.
    ///
    /// # Panics
    /// If `spec` fails [`ProcessSpec::check`]. Specs built by struct
    /// literal bypass the constructor and are caught here.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        if let Err(e) = spec.check() {
            panic!("invalid process spec: {e}");
        }
        Self {
            id: spec.id.clone(),
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Executes `ticks` units of work.
    ///
    /// # Panics
    /// If `ticks` is not positive or exceeds the remaining work.
    pub(crate) fn execute(&mut self, ticks: i64) {
        assert!(ticks > 0, "process '{}' executed for {ticks} ticks", self.id);
        assert!(
            ticks <= self.remaining_time,
            "process '{}' overran: {ticks} ticks with {} remaining",
            self.id,
            self.remaining_time
        );
        self.remaining_time -= ticks;
    }

    /// Records completion at `finish_time` and derives waiting/turnaround.
    ///
    /// # Panics
    /// If work remains, the record already finished, or it was never dispatched.
    pub(crate) fn complete(&mut self, finish_time: i64) {
        assert_eq!(self.remaining_time, 0, "process '{}' completed early", self.id);
        assert!(
            self.finish_time.is_none(),
            "process '{}' completed twice",
            self.id
        );
        let start = self
            .start_time
            .unwrap_or_else(|| panic!("process '{}' completed without dispatch", self.id));

        self.finish_time = Some(finish_time);
        self.turnaround_time = finish_time - self.arrival_time;
        self.waiting_time = start - self.arrival_time;
    }
}

impl From<&ProcessSpec> for ProcessRecord {
    fn from(spec: &ProcessSpec) -> Self {
        Self::from_spec(spec)
    }
}
