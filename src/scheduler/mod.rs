pub mod fcfs;
pub mod mlfq;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use crate::core::{SimState, TaskId, Ticks};

pub use fcfs::FcfsScheduler;
pub use mlfq::MlfqScheduler;
pub use priority::{PreemptivePriorityScheduler, PriorityScheduler};
pub use round_robin::RoundRobinScheduler;
pub use sjf::{SjfScheduler, SrtfScheduler};

/// Time slice granted per dispatch. The unbounded variant is a distinguished
/// value, not a numeric infinity: it means "run to completion" and never
/// enters slice arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantum {
    Slice(Ticks),
    Unbounded,
}

impl Quantum {
    /// The actual run length for a task with `remaining` ticks of work.
    pub fn cap(self, remaining: Ticks) -> Ticks {
        match self {
            Quantum::Slice(q) => q.min(remaining),
            Quantum::Unbounded => remaining,
        }
    }
}

/// Selection key for the ordered ready queues. `KeyedPriorityQueue` is a
/// max-heap, so `Ord` is flipped to pop the minimum key.
///
/// Ties on the policy's rank (burst, remaining, or priority) fall back to
/// earliest arrival, then original input order. A currently running process
/// gets no special treatment: it re-contends like any other candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    pub rank: i128,
    pub arrival: Ticks,
    pub index: TaskId,
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.rank, other.arrival, other.index).cmp(&(self.rank, self.arrival, self.index))
    }
}

/// A scheduling policy: owns the ready structure, picks the next task, and
/// sizes its slice. State transitions stay with the driver; the driver calls
/// `enqueue` exactly once per task arrival and `requeue` exactly once per
/// expired slice, so a policy never sees a task twice concurrently.
pub trait Scheduler {
    /// A task entered the ready set for the first time.
    fn enqueue(&mut self, state: &SimState, task: TaskId);

    /// Remove and return the next task to dispatch, if any is ready.
    fn pick(&mut self, state: &SimState) -> Option<TaskId>;

    /// Slice granted to `task` for this dispatch.
    fn quantum(&self, state: &SimState, task: TaskId) -> Quantum;

    /// Return a preempted task (slice expired, work left) to the ready
    /// structure. Never called for policies that always run to completion.
    fn requeue(&mut self, state: &SimState, task: TaskId);
}
