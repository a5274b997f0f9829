//! CPM/PERT schedule engine.
//!
//! Builds a dependency graph from the task list, orders it with Kahn's
//! algorithm, then derives earliest/latest start and finish times, slack
//! and the critical path in one forward and one backward pass. Invalid
//! graphs (cycles, unresolved or duplicated codes) are normal output,
//! reported through a flag on the result.

mod compute;
mod graph;
mod session;
mod types;

pub use compute::compute;
pub use session::ScheduleSession;
pub use types::{ScheduleResult, ScheduleRow, TaskTiming};
