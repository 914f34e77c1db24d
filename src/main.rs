use rand::prelude::*;
use schedsim::{simulate, Policy, ProcessSpec, Quantum, Ticks};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let procs = bernoulli_procs(40, 0.25, 2, 9, 0);
    println!("workload: {} processes", procs.len());

    let policies: Vec<(&str, Policy)> = vec![
        ("fcfs", Policy::Fcfs),
        ("sjf", Policy::SjfNonPreemptive),
        ("srtf", Policy::SjfPreemptive),
        ("priority", Policy::PriorityNonPreemptive),
        ("priority-p", Policy::PriorityPreemptive),
        ("rr q=3", Policy::RoundRobin { quantum: 3 }),
        (
            "mlfq 2/4/-",
            Policy::Mlfq {
                quanta: vec![Quantum::Slice(2), Quantum::Slice(4), Quantum::Unbounded],
            },
        ),
    ];

    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>9} {:>7} {:>11}",
        "policy", "avg wait", "avg turn", "avg resp", "makespan", "util%", "throughput"
    );
    for (name, policy) in &policies {
        let result = simulate(&procs, policy).expect("generated workload is valid");
        let m = result.metrics;
        println!(
            "{name:<12} {:>8.2} {:>8.2} {:>8.2} {:>9} {:>7.1} {:>11.3}",
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.avg_response_time,
            m.makespan,
            m.cpu_utilization,
            m.throughput
        );
    }
}

/// Seeded random workload: at each tick a process arrives with probability
/// `p_arrival`, with a uniform burst in `[min_burst, max_burst]` and a
/// uniform priority in 0..8.
fn bernoulli_procs(
    ticks: Ticks,
    p_arrival: f64,
    min_burst: Ticks,
    max_burst: Ticks,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut procs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            procs.push(ProcessSpec::new(
                format!("P{}", procs.len() + 1),
                t,
                rng.random_range(min_burst..=max_burst),
                rng.random_range(0..8),
            ));
        }
    }

    procs
}
