//! Persisted task list feeding the schedule engine.
//!
//! Owns the scheduler's working set. Every mutation replaces whole fields,
//! persists the full list, and leaves the caller to recompute; derived
//! timing is never written back onto the records.

use tracing::debug;
use uuid::Uuid;

use crate::models::{parse_duration, Task};
use crate::schedule::{compute, ScheduleResult};
use crate::storage::{load_json, save_json, Storage, StorageError};

pub const STORAGE_KEY: &str = "pert_v1";

#[derive(Debug, Clone)]
pub struct Planner {
    tasks: Vec<Task>,
}

impl Planner {
    /// Load the persisted task list, falling back to a small starter
    /// project when nothing usable is stored.
    pub fn load(storage: &dyn Storage) -> Self {
        let tasks = load_json(storage, STORAGE_KEY).unwrap_or_else(starter_tasks);
        Self { tasks }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        save_json(storage, STORAGE_KEY, &self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Run the engine over the current working set.
    pub fn recompute(&self) -> ScheduleResult {
        compute(&self.tasks)
    }

    /// Append a blank task row and persist.
    pub fn add_task(&mut self, storage: &mut dyn Storage) -> Result<Uuid, StorageError> {
        let task = Task::new("", "", 1.0, "");
        let id = task.id;
        self.tasks.push(task);
        self.save(storage)?;
        debug!(%id, "task added");
        Ok(id)
    }

    /// Remove a task by id and persist. Returns false when the id is
    /// unknown (nothing is written in that case).
    pub fn remove_task(&mut self, storage: &mut dyn Storage, id: Uuid) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.save(storage)?;
        debug!(%id, "task removed");
        Ok(true)
    }

    /// Replace a task's code (trimmed) and persist.
    pub fn set_code(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        code: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |task| task.code = code.trim().to_string())
    }

    /// Replace a task's name and persist.
    pub fn set_name(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        name: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |task| task.name = name.to_string())
    }

    /// Replace a task's duration from raw text and persist. Non-numeric
    /// or negative input normalizes to zero.
    pub fn set_duration_text(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        raw: &str,
    ) -> Result<bool, StorageError> {
        let duration = parse_duration(raw);
        self.edit(storage, id, |task| task.duration = duration)
    }

    /// Replace a task's dependency text verbatim and persist; parsing
    /// happens at compute time.
    pub fn set_deps(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        deps: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |task| task.deps = deps.to_string())
    }

    fn edit(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        apply: impl FnOnce(&mut Task),
    ) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        apply(task);
        self.save(storage)?;
        Ok(true)
    }
}

fn starter_tasks() -> Vec<Task> {
    vec![
        Task::new("A", "Scoping", 2.0, ""),
        Task::new("B", "Design", 3.0, "A"),
        Task::new("C", "Development", 5.0, "B"),
    ]
}
