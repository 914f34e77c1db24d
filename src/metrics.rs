//! Aggregate performance figures derived from completed processes.

use average::{Estimate, Mean};

use crate::core::Ticks;
use crate::sim::ProcessReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    pub makespan: Ticks,
    /// Percentage of the makespan spent serving processes.
    pub cpu_utilization: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
}

impl Metrics {
    /// Defined outcome for the zero-process case, where utilization and
    /// throughput would otherwise divide by a zero makespan.
    pub const EMPTY: Metrics = Metrics {
        avg_waiting_time: 0.0,
        avg_turnaround_time: 0.0,
        avg_response_time: 0.0,
        makespan: 0,
        cpu_utilization: 0.0,
        throughput: 0.0,
    };

    pub fn compute(reports: &[ProcessReport]) -> Metrics {
        let makespan = reports.iter().map(|r| r.end_time).max().unwrap_or(0);
        if makespan == 0 {
            return Metrics::EMPTY;
        }

        let total_burst: Ticks = reports.iter().map(|r| r.burst_time).sum();

        Metrics {
            avg_waiting_time: mean(reports.iter().map(|r| r.waiting_time)),
            avg_turnaround_time: mean(reports.iter().map(|r| r.turnaround_time)),
            avg_response_time: mean(reports.iter().map(|r| r.response_time)),
            makespan,
            cpu_utilization: total_burst as f64 / makespan as f64 * 100.0,
            throughput: reports.len() as f64 / makespan as f64,
        }
    }
}

fn mean(values: impl Iterator<Item = Ticks>) -> f64 {
    values.map(|v| v as f64).collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, arrival: Ticks, burst: Ticks, start: Ticks, end: Ticks) -> ProcessReport {
        ProcessReport {
            id: id.to_string(),
            arrival_time: arrival,
            burst_time: burst,
            priority: 0,
            start_time: start,
            end_time: end,
            waiting_time: end - arrival - burst,
            turnaround_time: end - arrival,
            response_time: start - arrival,
            color: "#4299E1",
        }
    }

    #[test]
    fn aggregates_match_hand_computation() {
        // FCFS over P1(0,5), P2(1,3), P3(2,1).
        let reports = vec![
            report("P1", 0, 5, 0, 5),
            report("P2", 1, 3, 5, 8),
            report("P3", 2, 1, 8, 9),
        ];
        let metrics = Metrics::compute(&reports);

        assert_eq!(metrics.makespan, 9);
        assert!((metrics.avg_waiting_time - 10.0 / 3.0).abs() < 1e-9);
        assert!((metrics.avg_turnaround_time - 19.0 / 3.0).abs() < 1e-9);
        assert!((metrics.avg_response_time - 10.0 / 3.0).abs() < 1e-9);
        assert!((metrics.cpu_utilization - 100.0).abs() < 1e-9);
        assert!((metrics.throughput - 3.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn idle_gaps_lower_utilization() {
        let reports = vec![report("A", 2, 3, 2, 5)];
        let metrics = Metrics::compute(&reports);

        assert_eq!(metrics.makespan, 5);
        assert!((metrics.cpu_utilization - 60.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_sentinel() {
        assert_eq!(Metrics::compute(&[]), Metrics::EMPTY);
    }
}
