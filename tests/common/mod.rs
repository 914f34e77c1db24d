#![allow(dead_code)]

use schedsim::{Policy, Quantum, SimulationResult, Ticks};

/// Initialize tracing from `RUST_LOG`. `try_init()` is idempotent: the
/// first call in the process succeeds, later calls are silently ignored.
pub fn setup_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Gantt segments as comparable `(process, start, end)` triples, color
/// stripped (cosmetic, excluded from correctness).
pub fn spans(result: &SimulationResult) -> Vec<(&str, Ticks, Ticks)> {
    result
        .gantt
        .iter()
        .map(|i| (i.process.as_str(), i.start_time, i.end_time))
        .collect()
}

/// Process ids ordered by completion time.
pub fn completion_order(result: &SimulationResult) -> Vec<&str> {
    let mut by_end: Vec<_> = result
        .processes
        .iter()
        .map(|p| (p.end_time, p.id.as_str()))
        .collect();
    by_end.sort();
    by_end.into_iter().map(|(_, id)| id).collect()
}

/// One configuration of every policy, for cross-policy property tests.
pub fn all_policies() -> Vec<(&'static str, Policy)> {
    vec![
        ("fcfs", Policy::Fcfs),
        ("sjf", Policy::SjfNonPreemptive),
        ("srtf", Policy::SjfPreemptive),
        ("priority", Policy::PriorityNonPreemptive),
        ("priority-preemptive", Policy::PriorityPreemptive),
        ("round-robin", Policy::RoundRobin { quantum: 2 }),
        (
            "mlfq",
            Policy::Mlfq {
                quanta: vec![Quantum::Slice(2), Quantum::Slice(4), Quantum::Unbounded],
            },
        ),
    ]
}
