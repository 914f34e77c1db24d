use tracing::trace;

use super::observer::Observer;
use super::state::{SimState, TaskId};
use crate::scheduler::Scheduler;
use crate::timeline::Timeline;

/// The shared time-advancement loop. Every policy runs through this core;
/// the policy only decides which Ready task runs next and for how long.
pub struct SimCore<S: Scheduler> {
    pub state: SimState,
    pub scheduler: S,
    timeline: Timeline,
    observer: Observer,
}

impl<S: Scheduler> SimCore<S> {
    pub fn new(state: SimState, scheduler: S) -> Self {
        Self {
            state,
            scheduler,
            timeline: Timeline::new(),
            observer: Observer::new(),
        }
    }

    /// Drive the clock until every task has completed, returning the final
    /// task table and the compacted timeline.
    ///
    /// A task whose slice expires is handed back to the scheduler at the
    /// start of the *next* decision point, after that point's arrivals have
    /// been enqueued. Under Round Robin this puts processes that arrived
    /// during the slice ahead of the preempted process in the queue.
    pub fn run(mut self) -> (SimState, Timeline) {
        let mut preempted: Option<TaskId> = None;

        while !self.state.all_completed() {
            for task in self.state.admit_arrived() {
                self.scheduler.enqueue(&self.state, task);
            }
            if let Some(task) = preempted.take() {
                self.scheduler.requeue(&self.state, task);
            }

            let Some(task) = self.scheduler.pick(&self.state) else {
                let next = self
                    .state
                    .next_arrival()
                    .expect("ready set empty with no future arrivals and work left");
                trace!(now = self.state.now, until = next, "core idle");
                self.state.jump_to(next);
                continue;
            };

            self.state.set_running(task);
            let started = self.state.now;
            let slice = self
                .scheduler
                .quantum(&self.state, task)
                .cap(self.state.task(task).remaining_time);
            self.state.run_for(task, slice);

            trace!(
                task = %self.state.task(task).name,
                from = started,
                to = self.state.now,
                "dispatch"
            );
            self.timeline.record(self.state.task(task), started, self.state.now);

            if self.state.task(task).remaining_time == 0 {
                self.state.mark_completed(task);
            } else {
                self.state.preempt(task);
                preempted = Some(task);
            }

            self.observer.observe(&self.state);
        }

        (self.state, self.timeline)
    }
}
