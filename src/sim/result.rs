use crate::core::{ProcState, Task, Ticks};
use crate::metrics::Metrics;
use crate::timeline::GanttInterval;

/// A completed process with every derived timing field populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub response_time: Ticks,
    pub color: &'static str,
}

impl ProcessReport {
    /// Derive the post-hoc timing fields from a completed task. Only the
    /// termination guarantee makes this total: every task is Completed with
    /// start and end times set once the driver returns.
    pub(crate) fn from_task(task: &Task) -> Self {
        assert!(
            task.state == ProcState::Completed,
            "report requested for task {} in state {:?}",
            task.id,
            task.state
        );
        let start_time = task.start_time.expect("completed task has a start time");
        let end_time = task.end_time.expect("completed task has an end time");

        let turnaround_time = end_time - task.arrival_time;
        Self {
            id: task.name.clone(),
            arrival_time: task.arrival_time,
            burst_time: task.burst_time,
            priority: task.priority,
            start_time,
            end_time,
            waiting_time: turnaround_time - task.burst_time,
            turnaround_time,
            response_time: start_time - task.arrival_time,
            color: task.color,
        }
    }
}

/// Everything one simulation call produces. Built fresh per call and
/// immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Completed processes in original input order.
    pub processes: Vec<ProcessReport>,
    /// Compacted dispatch timeline in non-decreasing start order.
    pub gantt: Vec<GanttInterval>,
    pub metrics: Metrics,
}
