//! Public entry points: one function per policy plus a selector-driven
//! dispatcher. Each call validates its input, clones it into an owned
//! simulation state, runs the shared driver, and assembles a fresh result.

pub mod result;
pub mod spec;

use tracing::debug;

use crate::core::{SimCore, SimState, Ticks};
use crate::metrics::Metrics;
use crate::scheduler::{
    FcfsScheduler, MlfqScheduler, PreemptivePriorityScheduler, PriorityScheduler, Quantum,
    RoundRobinScheduler, Scheduler, SjfScheduler, SrtfScheduler,
};

pub use result::{ProcessReport, SimulationResult};
pub use spec::{Policy, ProcessSpec, SpecError};

/// Run `specs` under the given policy selector.
pub fn simulate(specs: &[ProcessSpec], policy: &Policy) -> Result<SimulationResult, SpecError> {
    spec::validate_policy(policy)?;
    match policy {
        Policy::Fcfs => fcfs(specs),
        Policy::SjfNonPreemptive => sjf_non_preemptive(specs),
        Policy::SjfPreemptive => sjf_preemptive(specs),
        Policy::PriorityNonPreemptive => priority_non_preemptive(specs),
        Policy::PriorityPreemptive => priority_preemptive(specs),
        Policy::RoundRobin { quantum } => round_robin(specs, *quantum),
        Policy::Mlfq { quanta } => mlfq(specs, quanta),
    }
}

pub fn fcfs(specs: &[ProcessSpec]) -> Result<SimulationResult, SpecError> {
    spec::validate_specs(specs)?;
    Ok(run(specs, FcfsScheduler::new(), "fcfs"))
}

pub fn sjf_non_preemptive(specs: &[ProcessSpec]) -> Result<SimulationResult, SpecError> {
    spec::validate_specs(specs)?;
    Ok(run(specs, SjfScheduler::new(), "sjf"))
}

pub fn sjf_preemptive(specs: &[ProcessSpec]) -> Result<SimulationResult, SpecError> {
    spec::validate_specs(specs)?;
    Ok(run(specs, SrtfScheduler::new(), "srtf"))
}

pub fn priority_non_preemptive(specs: &[ProcessSpec]) -> Result<SimulationResult, SpecError> {
    spec::validate_specs(specs)?;
    Ok(run(specs, PriorityScheduler::new(), "priority"))
}

pub fn priority_preemptive(specs: &[ProcessSpec]) -> Result<SimulationResult, SpecError> {
    spec::validate_specs(specs)?;
    Ok(run(specs, PreemptivePriorityScheduler::new(), "priority-preemptive"))
}

pub fn round_robin(specs: &[ProcessSpec], quantum: Ticks) -> Result<SimulationResult, SpecError> {
    if quantum == 0 {
        return Err(SpecError::ZeroQuantum);
    }
    spec::validate_specs(specs)?;
    Ok(run(specs, RoundRobinScheduler::new(quantum), "round-robin"))
}

pub fn mlfq(specs: &[ProcessSpec], quanta: &[Quantum]) -> Result<SimulationResult, SpecError> {
    spec::validate_mlfq_quanta(quanta)?;
    spec::validate_specs(specs)?;
    Ok(run(specs, MlfqScheduler::new(quanta), "mlfq"))
}

fn run<S: Scheduler>(specs: &[ProcessSpec], scheduler: S, policy: &str) -> SimulationResult {
    debug!(policy, processes = specs.len(), "simulation start");

    let (state, timeline) = SimCore::new(SimState::new(specs), scheduler).run();

    let processes: Vec<ProcessReport> = state.tasks.iter().map(ProcessReport::from_task).collect();
    let metrics = Metrics::compute(&processes);

    debug!(
        policy,
        makespan = metrics.makespan,
        segments = timeline.intervals().len(),
        "simulation done"
    );

    SimulationResult {
        processes,
        gantt: timeline.into_intervals(),
        metrics,
    }
}
