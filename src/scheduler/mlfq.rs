use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::{Quantum, Scheduler};
use crate::core::{SimState, TaskId};

/// Multilevel feedback queue. New arrivals enter level 0; a non-empty
/// higher level always wins the next decision point; FIFO within a level.
/// Exhausting a level's slice demotes the task one level (clamped to the
/// last), losing its queue position. There is no promotion or aging, so
/// demoted tasks starve under a steady stream of level-0 arrivals.
///
/// The last level's quantum is `Quantum::Unbounded`; callers validate the
/// level list before construction.
pub struct MlfqScheduler {
    levels: Vec<Level>,
    level_of: FxHashMap<TaskId, usize>,
}

struct Level {
    queue: VecDeque<TaskId>,
    quantum: Quantum,
}

impl MlfqScheduler {
    pub fn new(quanta: &[Quantum]) -> Self {
        assert!(!quanta.is_empty(), "MLFQ needs at least one level");
        assert!(
            matches!(quanta.last(), Some(Quantum::Unbounded)),
            "last MLFQ level must be unbounded"
        );

        Self {
            levels: quanta
                .iter()
                .map(|&quantum| Level {
                    queue: VecDeque::new(),
                    quantum,
                })
                .collect(),
            level_of: FxHashMap::default(),
        }
    }

    fn push(&mut self, task: TaskId, level: usize) {
        let level = level.min(self.levels.len() - 1);
        self.level_of.insert(task, level);
        self.levels[level].queue.push_back(task);
    }
}

impl Scheduler for MlfqScheduler {
    fn enqueue(&mut self, _state: &SimState, task: TaskId) {
        self.push(task, 0);
    }

    fn pick(&mut self, _state: &SimState) -> Option<TaskId> {
        self.levels
            .iter_mut()
            .find_map(|level| level.queue.pop_front())
    }

    fn quantum(&self, _state: &SimState, task: TaskId) -> Quantum {
        let level = self.level_of[&task];
        self.levels[level].quantum
    }

    fn requeue(&mut self, _state: &SimState, task: TaskId) {
        let level = self.level_of[&task];
        self.push(task, level + 1);
    }
}
