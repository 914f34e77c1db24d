use super::state::{ProcState, SimState};

/// Structural invariant checks run after every driver step. Debug builds
/// catch a corrupted simulation at the step that corrupted it instead of
/// in the final numbers.
#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, state: &SimState) {
        self.step += 1;

        if let Some(task_id) = state.running() {
            let task = state.task(task_id);
            debug_assert_eq!(
                task.state,
                ProcState::Running,
                "running slot holds task {task_id} whose state is not Running"
            );
        }

        let running_count = state
            .tasks
            .iter()
            .filter(|t| t.state == ProcState::Running)
            .count();
        debug_assert!(
            running_count <= 1,
            "step {}: {running_count} tasks marked Running on a single core",
            self.step
        );

        for task in &state.tasks {
            debug_assert!(
                task.remaining_time <= task.burst_time,
                "task {} remaining {} exceeds burst {}",
                task.id,
                task.remaining_time,
                task.burst_time
            );

            match task.state {
                ProcState::NotArrived => {
                    debug_assert!(
                        task.arrival_time > state.now,
                        "task {} still NotArrived at t={} despite arrival {}",
                        task.id,
                        state.now,
                        task.arrival_time
                    );
                    debug_assert!(
                        task.start_time.is_none(),
                        "task {} has a start time before arriving",
                        task.id
                    );
                }
                ProcState::Ready => {
                    debug_assert!(
                        task.remaining_time > 0,
                        "task {} is Ready with no work left",
                        task.id
                    );
                }
                ProcState::Running => {
                    debug_assert_eq!(
                        state.running(),
                        Some(task.id),
                        "task {} marked Running but not in the running slot",
                        task.id
                    );
                    debug_assert!(
                        task.start_time.is_some(),
                        "task {} is Running without a start time",
                        task.id
                    );
                }
                ProcState::Completed => {
                    debug_assert_eq!(
                        task.remaining_time, 0,
                        "task {} Completed with work left",
                        task.id
                    );
                    let (start, end) = (task.start_time, task.end_time);
                    debug_assert!(
                        start.is_some() && end.is_some(),
                        "task {} Completed without start/end times",
                        task.id
                    );
                    debug_assert!(
                        start <= end,
                        "task {} started after it ended ({start:?} > {end:?})",
                        task.id
                    );
                }
            }
        }
    }
}
