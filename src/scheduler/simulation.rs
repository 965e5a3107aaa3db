//! Multi-policy simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the process set and every policy configuration.
//! 2. For each configured policy, run it over its own copy of the specs.
//! 3. Derive metrics and the record-order trace from each finished run.
//!
//! Nothing is run unless everything validates.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{build_trace, RunMetrics};
use crate::models::{ProcessRecord, ProcessSpec};
use crate::policies::{Fcfs, PolicyRun, RoundRobin, SchedulingPolicy, Srt, StartTimeMode};
use crate::validation::{validate_specs, ValidationError};

/// Quantum used by the standard policy lineup.
pub const DEFAULT_QUANTUM: i64 = 3;

/// Configuration of one policy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicyConfig {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Remaining Time.
    Srt,
    /// Round Robin with the given quantum.
    RoundRobin {
        /// Time slice per dispatch. Must be positive.
        quantum: i64,
    },
}

impl PolicyConfig {
    /// Instantiates the policy. Fails on an invalid quantum.
    pub fn build(
        &self,
        start_time_mode: StartTimeMode,
    ) -> Result<Box<dyn SchedulingPolicy>, ValidationError> {
        let policy: Box<dyn SchedulingPolicy> = match self {
            PolicyConfig::Fcfs => Box::new(Fcfs),
            PolicyConfig::Srt => Box::new(Srt::new().with_start_time_mode(start_time_mode)),
            PolicyConfig::RoundRobin { quantum } => {
                Box::new(RoundRobin::new(*quantum)?.with_start_time_mode(start_time_mode))
            }
        };
        Ok(policy)
    }
}

/// Simulation configuration: which policies to run and how.
///
/// `Default` is the standard lineup: FCFS, SRT, and Round Robin with
/// quantum [`DEFAULT_QUANTUM`], using last-dispatch start times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Policies to run, in report order.
    pub policies: Vec<PolicyConfig>,
    /// Start-time semantics for the preemptive policies.
    pub start_time_mode: StartTimeMode,
}

impl SimulationConfig {
    /// Creates a configuration with no policies.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
            start_time_mode: StartTimeMode::default(),
        }
    }

    /// Adds a policy.
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policies.push(policy);
        self
    }

    /// Sets the start-time semantics.
    pub fn with_start_time_mode(mut self, mode: StartTimeMode) -> Self {
        self.start_time_mode = mode;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
            .with_policy(PolicyConfig::Fcfs)
            .with_policy(PolicyConfig::Srt)
            .with_policy(PolicyConfig::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            })
    }
}

/// Everything derived from one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// The run itself (records and timeline).
    pub run: PolicyRun,
    /// Aggregate metrics over the run's records.
    pub metrics: RunMetrics,
    /// Record-order Gantt trace.
    pub trace: String,
}

impl PolicyOutcome {
    /// Derives metrics and trace from a finished run.
    pub fn from_run(run: PolicyRun) -> Self {
        let metrics = RunMetrics::calculate(&run.records);
        let trace = build_trace(&run.records);
        Self {
            run,
            metrics,
            trace,
        }
    }
}

/// Runs every configured policy over independent copies of `specs`.
///
/// # Returns
/// One outcome per configured policy, in configuration order, or every
/// validation error found (no policy runs in that case).
pub fn simulate(
    specs: &[ProcessSpec],
    config: &SimulationConfig,
) -> Result<Vec<PolicyOutcome>, Vec<ValidationError>> {
    let mut errors = validate_specs(specs).err().unwrap_or_default();

    let mut policies = Vec::with_capacity(config.policies.len());
    for policy in &config.policies {
        match policy.build(config.start_time_mode) {
            Ok(p) => policies.push(p),
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        warn!("simulation rejected with {} validation errors", errors.len());
        return Err(errors);
    }

    debug!(
        "simulating {} processes under {} policies",
        specs.len(),
        policies.len()
    );
    Ok(policies
        .iter()
        .map(|p| PolicyOutcome::from_run(p.run(specs)))
        .collect())
}

/// Runs FCFS. Records come back in input order.
///
/// Rejects an invalid process set before running.
pub fn run_fcfs(specs: &[ProcessSpec]) -> Result<Vec<ProcessRecord>, Vec<ValidationError>> {
    validate_specs(specs)?;
    Ok(Fcfs.run(specs).into_records())
}

/// Runs SRT with legacy start times. Records come back in completion order.
///
/// Rejects an invalid process set before running.
pub fn run_srt(specs: &[ProcessSpec]) -> Result<Vec<ProcessRecord>, Vec<ValidationError>> {
    validate_specs(specs)?;
    Ok(Srt::new().run(specs).into_records())
}

/// Runs Round Robin with legacy start times. Records come back in
/// completion order. Rejects an invalid process set or `quantum <= 0`
/// before running, reporting every problem found.
pub fn run_round_robin(
    specs: &[ProcessSpec],
    quantum: i64,
) -> Result<Vec<ProcessRecord>, Vec<ValidationError>> {
    let mut errors = validate_specs(specs).err().unwrap_or_default();
    match RoundRobin::new(quantum) {
        Ok(rr) if errors.is_empty() => Ok(rr.run(specs).into_records()),
        Ok(_) => Err(errors),
        Err(e) => {
            errors.push(e);
            Err(errors)
        }
    }
}
