use keyed_priority_queue::KeyedPriorityQueue;

use super::{Quantum, RankKey, Scheduler};
use crate::core::{SimState, TaskId};

/// Shortest job first, non-preemptive: the ready task with the smallest
/// total burst runs to completion before the next selection.
pub struct SjfScheduler {
    ready: KeyedPriorityQueue<TaskId, RankKey>,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }

    fn key(state: &SimState, task: TaskId) -> RankKey {
        let t = state.task(task);
        RankKey {
            rank: t.burst_time as i128,
            arrival: t.arrival_time,
            index: t.id,
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn enqueue(&mut self, state: &SimState, task: TaskId) {
        self.ready.push(task, Self::key(state, task));
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.ready.pop().map(|t| t.0)
    }

    fn quantum(&self, _state: &SimState, _task: TaskId) -> Quantum {
        Quantum::Unbounded
    }

    fn requeue(&mut self, _state: &SimState, task: TaskId) {
        unreachable!("task {task} preempted under non-preemptive SJF");
    }
}

/// Shortest remaining time first (preemptive SJF): one-tick slices, with
/// the smallest remaining time winning every re-evaluation. A shorter job
/// arriving mid-burst preempts at the next tick boundary.
pub struct SrtfScheduler {
    ready: KeyedPriorityQueue<TaskId, RankKey>,
}

impl SrtfScheduler {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }

    fn key(state: &SimState, task: TaskId) -> RankKey {
        let t = state.task(task);
        RankKey {
            rank: t.remaining_time as i128,
            arrival: t.arrival_time,
            index: t.id,
        }
    }
}

impl Default for SrtfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SrtfScheduler {
    fn enqueue(&mut self, state: &SimState, task: TaskId) {
        self.ready.push(task, Self::key(state, task));
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.ready.pop().map(|t| t.0)
    }

    fn quantum(&self, _state: &SimState, _task: TaskId) -> Quantum {
        Quantum::Slice(1)
    }

    // Remaining time just shrank, so the key is recomputed on the way back in.
    fn requeue(&mut self, state: &SimState, task: TaskId) {
        self.ready.push(task, Self::key(state, task));
    }
}
