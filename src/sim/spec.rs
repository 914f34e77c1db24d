use rustc_hash::FxHashSet;

use crate::core::Ticks;
use crate::scheduler::Quantum;

/// Caller-supplied description of one process. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Unique, non-empty identifier.
    pub id: String,
    pub arrival_time: Ticks,
    /// Total CPU time required; must be positive.
    pub burst_time: Ticks,
    /// Lower value conventionally means higher urgency; the engine only
    /// compares the number and enforces no convention.
    pub priority: i64,
}

impl ProcessSpec {
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks, priority: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Policy selector with per-policy parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    SjfNonPreemptive,
    SjfPreemptive,
    PriorityNonPreemptive,
    PriorityPreemptive,
    RoundRobin { quantum: Ticks },
    Mlfq { quanta: Vec<Quantum> },
}

/// Input rejected before the simulation starts. The engine never coerces
/// or defaults invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("process id must not be empty")]
    EmptyId,
    #[error("duplicate process id `{0}`")]
    DuplicateId(String),
    #[error("process `{0}` has zero burst time")]
    ZeroBurst(String),
    #[error("round robin quantum must be at least 1")]
    ZeroQuantum,
    #[error("multilevel feedback queue needs at least one level")]
    NoLevels,
    #[error("last multilevel feedback queue level must be unbounded")]
    BoundedLastLevel,
    #[error("multilevel feedback queue level {0} has a zero quantum")]
    ZeroLevelQuantum(usize),
}

pub fn validate_specs(specs: &[ProcessSpec]) -> Result<(), SpecError> {
    let mut seen = FxHashSet::default();
    for spec in specs {
        if spec.id.is_empty() {
            return Err(SpecError::EmptyId);
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(SpecError::DuplicateId(spec.id.clone()));
        }
        if spec.burst_time == 0 {
            return Err(SpecError::ZeroBurst(spec.id.clone()));
        }
    }
    Ok(())
}

pub fn validate_policy(policy: &Policy) -> Result<(), SpecError> {
    match policy {
        Policy::RoundRobin { quantum: 0 } => Err(SpecError::ZeroQuantum),
        Policy::Mlfq { quanta } => validate_mlfq_quanta(quanta),
        _ => Ok(()),
    }
}

pub fn validate_mlfq_quanta(quanta: &[Quantum]) -> Result<(), SpecError> {
    if quanta.is_empty() {
        return Err(SpecError::NoLevels);
    }
    if *quanta.last().expect("non-empty") != Quantum::Unbounded {
        return Err(SpecError::BoundedLastLevel);
    }
    for (level, quantum) in quanta.iter().enumerate() {
        if *quantum == Quantum::Slice(0) {
            return Err(SpecError::ZeroLevelQuantum(level));
        }
    }
    Ok(())
}
