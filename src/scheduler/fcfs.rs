use std::collections::VecDeque;

use super::{Quantum, Scheduler};
use crate::core::{SimState, TaskId};

/// First-come, first-served. The driver admits arrivals in
/// `(arrival_time, input index)` order, so a plain FIFO queue dispatches in
/// exactly the order a stable sort by arrival time would produce. Every
/// dispatch runs to completion.
pub struct FcfsScheduler {
    queue: VecDeque<TaskId>,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FcfsScheduler {
    fn enqueue(&mut self, _state: &SimState, task: TaskId) {
        self.queue.push_back(task);
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.queue.pop_front()
    }

    fn quantum(&self, _state: &SimState, _task: TaskId) -> Quantum {
        Quantum::Unbounded
    }

    fn requeue(&mut self, _state: &SimState, task: TaskId) {
        unreachable!("task {task} preempted under FCFS, which never preempts");
    }
}
