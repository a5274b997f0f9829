//! Project-tracking toolkit: independent widget models over small locally
//! persisted lists, with a CPM/PERT schedule engine at the core.
//!
//! Each widget (task board, budget table, risk register, deliverable
//! list, responsibility matrix, work-breakdown tree) is an isolated CRUD
//! surface; the [`schedule`] module computes earliest/latest timing,
//! slack and the critical path from the planner's task list.

pub mod board;
pub mod budget;
pub mod deliverables;
pub mod kpi;
pub mod models;
pub mod planner;
pub mod raci;
pub mod risks;
pub mod schedule;
pub mod storage;
pub mod wbs;

pub use board::{Board, Card, ColumnId};
pub use budget::{BudgetRow, BudgetTable, BudgetTotals};
pub use deliverables::{Deliverable, DeliverableList, DeliverableStatus};
pub use kpi::Dashboard;
pub use models::{parse_dependencies, parse_duration, Task};
pub use planner::Planner;
pub use raci::{RaciMatrix, RaciRole};
pub use risks::{Risk, RiskRegister, SeverityLevel};
pub use schedule::{compute, ScheduleResult, ScheduleRow, ScheduleSession, TaskTiming};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use wbs::{WbsNode, WbsTree};
