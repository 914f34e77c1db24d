use std::collections::VecDeque;

use super::{Quantum, Scheduler};
use crate::core::{SimState, TaskId, Ticks};

/// Round robin: strict FIFO queue, fixed slice. A task whose slice expires
/// goes back to the tail, behind anything that arrived during the slice.
/// The Ready/Running state split in the driver guarantees a task is never
/// enqueued while it is already queued or on the core.
pub struct RoundRobinScheduler {
    queue: VecDeque<TaskId>,
    quantum: Ticks,
}

impl RoundRobinScheduler {
    /// `quantum` must be at least 1; callers validate before construction.
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum >= 1, "round robin quantum must be at least 1");
        Self {
            queue: VecDeque::new(),
            quantum,
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn enqueue(&mut self, _state: &SimState, task: TaskId) {
        self.queue.push_back(task);
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.queue.pop_front()
    }

    fn quantum(&self, _state: &SimState, _task: TaskId) -> Quantum {
        Quantum::Slice(self.quantum)
    }

    fn requeue(&mut self, _state: &SimState, task: TaskId) {
        self.queue.push_back(task);
    }
}
