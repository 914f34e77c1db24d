pub mod driver;
pub mod observer;
pub mod state;

pub use driver::SimCore;
pub use state::{ProcState, SimState, Task, TaskId, Ticks};
