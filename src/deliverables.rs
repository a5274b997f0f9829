//! Deliverable list: named outputs with owner, due date and status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{load_json, save_json, Storage, StorageError};

pub const STORAGE_KEY: &str = "deliverables_v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverableStatus {
    Todo,
    Doing,
    Done,
    Late,
}

impl DeliverableStatus {
    pub fn label(self) -> &'static str {
        match self {
            DeliverableStatus::Todo => "To do",
            DeliverableStatus::Doing => "In progress",
            DeliverableStatus::Done => "Done",
            DeliverableStatus::Late => "Late",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub due: Option<NaiveDate>,
    pub status: DeliverableStatus,
}

#[derive(Debug, Clone)]
pub struct DeliverableList {
    rows: Vec<Deliverable>,
}

impl DeliverableList {
    pub fn load(storage: &dyn Storage) -> Self {
        let rows = load_json(storage, STORAGE_KEY).unwrap_or_else(starter_rows);
        Self { rows }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        save_json(storage, STORAGE_KEY, &self.rows)
    }

    pub fn rows(&self) -> &[Deliverable] {
        &self.rows
    }

    pub fn add(&mut self, storage: &mut dyn Storage) -> Result<Uuid, StorageError> {
        let deliverable = Deliverable {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            owner: String::new(),
            due: None,
            status: DeliverableStatus::Todo,
        };
        let id = deliverable.id;
        self.rows.push(deliverable);
        self.save(storage)?;
        Ok(id)
    }

    pub fn remove(&mut self, storage: &mut dyn Storage, id: Uuid) -> Result<bool, StorageError> {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        if self.rows.len() == before {
            return Ok(false);
        }
        self.save(storage)?;
        Ok(true)
    }

    pub fn set_name(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        name: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |row| row.name = name.to_string())
    }

    pub fn set_description(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        description: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |row| row.description = description.to_string())
    }

    pub fn set_owner(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        owner: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |row| row.owner = owner.to_string())
    }

    pub fn set_due(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        due: Option<NaiveDate>,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |row| row.due = due)
    }

    pub fn set_status(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        status: DeliverableStatus,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |row| row.status = status)
    }

    /// (done, total) counts over the list.
    pub fn progress(&self) -> (usize, usize) {
        let done = self
            .rows
            .iter()
            .filter(|row| row.status == DeliverableStatus::Done)
            .count();
        (done, self.rows.len())
    }

    fn edit(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        apply: impl FnOnce(&mut Deliverable),
    ) -> Result<bool, StorageError> {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(false);
        };
        apply(row);
        self.save(storage)?;
        Ok(true)
    }
}

fn starter_rows() -> Vec<Deliverable> {
    vec![Deliverable {
        id: Uuid::new_v4(),
        name: "Requirements document".to_string(),
        description: "Needs and perimeter".to_string(),
        owner: "Project lead".to_string(),
        due: None,
        status: DeliverableStatus::Todo,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_defaults() {
        let storage = MemoryStorage::new();
        let list = DeliverableList::load(&storage);
        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.rows()[0].status, DeliverableStatus::Todo);
    }

    #[test]
    fn test_roundtrip_with_due_date() {
        let mut storage = MemoryStorage::new();
        let mut list = DeliverableList::load(&storage);
        let id = list.add(&mut storage).unwrap();

        let due = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        list.set_name(&mut storage, id, "Launch review").unwrap();
        list.set_due(&mut storage, id, Some(due)).unwrap();
        list.set_status(&mut storage, id, DeliverableStatus::Doing)
            .unwrap();

        let reloaded = DeliverableList::load(&storage);
        let row = reloaded.rows().iter().find(|r| r.id == id).unwrap();
        assert_eq!(row.name, "Launch review");
        assert_eq!(row.due, Some(due));
        assert_eq!(row.status, DeliverableStatus::Doing);
    }

    #[test]
    fn test_progress() {
        let mut storage = MemoryStorage::new();
        let mut list = DeliverableList::load(&storage);
        let id = list.add(&mut storage).unwrap();
        list.set_status(&mut storage, id, DeliverableStatus::Done)
            .unwrap();
        assert_eq!(list.progress(), (1, 2));
    }

    #[test]
    fn test_remove() {
        let mut storage = MemoryStorage::new();
        let mut list = DeliverableList::load(&storage);
        let id = list.rows()[0].id;
        assert!(list.remove(&mut storage, id).unwrap());
        assert!(list.rows().is_empty());
        assert!(!list.remove(&mut storage, id).unwrap());
    }
}
