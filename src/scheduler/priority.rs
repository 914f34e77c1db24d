use keyed_priority_queue::KeyedPriorityQueue;

use super::{Quantum, RankKey, Scheduler};
use crate::core::{SimState, TaskId};

fn key(state: &SimState, task: TaskId) -> RankKey {
    let t = state.task(task);
    RankKey {
        rank: t.priority as i128,
        arrival: t.arrival_time,
        index: t.id,
    }
}

/// Priority scheduling, non-preemptive. Numerically smaller priority wins;
/// the engine does not enforce any convention beyond that comparison.
/// There is no aging: a perpetually out-prioritized process starves.
pub struct PriorityScheduler {
    ready: KeyedPriorityQueue<TaskId, RankKey>,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriorityScheduler {
    fn enqueue(&mut self, state: &SimState, task: TaskId) {
        self.ready.push(task, key(state, task));
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.ready.pop().map(|t| t.0)
    }

    fn quantum(&self, _state: &SimState, _task: TaskId) -> Quantum {
        Quantum::Unbounded
    }

    fn requeue(&mut self, _state: &SimState, task: TaskId) {
        unreachable!("task {task} preempted under non-preemptive priority scheduling");
    }
}

/// Priority scheduling, preemptive: one-tick slices, highest urgency wins
/// every re-evaluation, so a higher-priority arrival preempts at the next
/// tick boundary. No aging here either.
pub struct PreemptivePriorityScheduler {
    ready: KeyedPriorityQueue<TaskId, RankKey>,
}

impl PreemptivePriorityScheduler {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }
}

impl Default for PreemptivePriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PreemptivePriorityScheduler {
    fn enqueue(&mut self, state: &SimState, task: TaskId) {
        self.ready.push(task, key(state, task));
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.ready.pop().map(|t| t.0)
    }

    fn quantum(&self, _state: &SimState, _task: TaskId) -> Quantum {
        Quantum::Slice(1)
    }

    fn requeue(&mut self, state: &SimState, task: TaskId) {
        self.ready.push(task, key(state, task));
    }
}
