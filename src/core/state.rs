use crate::sim::ProcessSpec;
use crate::timeline::PALETTE;

// Index into the owned task table
pub type TaskId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    NotArrived,
    Ready,
    Running,
    Completed,
}

/// The engine-owned clone of one input process. Input fields are copied
/// verbatim from the caller's `ProcessSpec`; the rest is simulation state
/// written only by the driver.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub state: ProcState,
    pub remaining_time: Ticks,
    pub start_time: Option<Ticks>,
    pub end_time: Option<Ticks>,
    pub color: &'static str,
}

/// Simulation clock plus task table. The caller's records never enter this
/// structure; `SimState::new` clones them, so a simulation call cannot
/// mutate its input.
#[derive(Debug)]
pub struct SimState {
    pub now: Ticks,
    pub tasks: Vec<Task>,
    running: Option<TaskId>,
}

impl SimState {
    pub fn new(specs: &[ProcessSpec]) -> Self {
        let tasks = specs
            .iter()
            .enumerate()
            .map(|(id, spec)| Task {
                id,
                name: spec.id.clone(),
                arrival_time: spec.arrival_time,
                burst_time: spec.burst_time,
                priority: spec.priority,
                state: ProcState::NotArrived,
                remaining_time: spec.burst_time,
                start_time: None,
                end_time: None,
                color: PALETTE[id % PALETTE.len()],
            })
            .collect();

        Self {
            now: 0,
            tasks,
            running: None,
        }
    }

    pub fn task(&self, task_id: TaskId) -> &Task {
        &self.tasks[task_id]
    }

    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.state == ProcState::Completed)
    }

    pub fn running(&self) -> Option<TaskId> {
        self.running
    }

    /// Earliest arrival among tasks that have not arrived yet.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.tasks
            .iter()
            .filter(|t| t.state == ProcState::NotArrived)
            .map(|t| t.arrival_time)
            .min()
    }

    /// Move every task whose arrival time has passed into Ready and return
    /// the batch, ordered by `(arrival_time, input index)`. A task can take
    /// the NotArrived -> Ready transition exactly once, so double admission
    /// cannot happen regardless of what the policy does with the batch.
    pub fn admit_arrived(&mut self) -> Vec<TaskId> {
        let mut batch: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|t| t.state == ProcState::NotArrived && t.arrival_time <= self.now)
            .map(|t| t.id)
            .collect();
        batch.sort_by_key(|&id| (self.tasks[id].arrival_time, id));

        for &id in &batch {
            self.tasks[id].state = ProcState::Ready;
        }
        batch
    }

    /// Jump the clock across an idle gap. No interval is emitted for it.
    pub fn jump_to(&mut self, target: Ticks) {
        assert!(
            target > self.now,
            "idle jump must move time forward (now={}, target={target})",
            self.now
        );
        self.now = target;
    }

    /// Dispatch `task_id` on the core. First dispatch records `start_time`.
    pub fn set_running(&mut self, task_id: TaskId) {
        assert!(
            self.running.is_none(),
            "task {task_id} dispatched while task {:?} is still running",
            self.running
        );

        let now = self.now;
        let task = &mut self.tasks[task_id];
        assert!(
            task.state == ProcState::Ready,
            "task {task_id} dispatched from state {:?}, expected Ready",
            task.state
        );

        task.state = ProcState::Running;
        if task.start_time.is_none() {
            task.start_time = Some(now);
        }
        self.running = Some(task_id);
    }

    /// Burn `slice` ticks of the running task and advance the clock.
    pub fn run_for(&mut self, task_id: TaskId, slice: Ticks) {
        assert!(slice > 0, "task {task_id} granted an empty slice");
        debug_assert_eq!(self.running, Some(task_id), "run_for on a non-running task");

        let task = &mut self.tasks[task_id];
        task.remaining_time = task
            .remaining_time
            .checked_sub(slice)
            .unwrap_or_else(|| panic!("task {task_id} remaining time went negative"));
        self.now += slice;
    }

    /// Slice expired with work left: back to Ready, pending requeue.
    pub fn preempt(&mut self, task_id: TaskId) {
        debug_assert_eq!(self.running, Some(task_id), "preempt on a non-running task");
        let task = &mut self.tasks[task_id];
        debug_assert!(
            task.remaining_time > 0,
            "task {task_id} preempted with no work left"
        );
        task.state = ProcState::Ready;
        self.running = None;
    }

    pub fn mark_completed(&mut self, task_id: TaskId) {
        debug_assert_eq!(
            self.running,
            Some(task_id),
            "completing task {task_id} that is not running"
        );

        let now = self.now;
        let task = &mut self.tasks[task_id];
        assert!(
            task.remaining_time == 0,
            "task {task_id} completed with {} ticks remaining",
            task.remaining_time
        );

        task.state = ProcState::Completed;
        task.end_time = Some(now);
        self.running = None;
    }
}
