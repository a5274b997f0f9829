//! Kanban board: three fixed columns of text cards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{load_json, save_json, Storage, StorageError};

pub const STORAGE_KEY: &str = "kanban_v1";

/// The three board columns, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Todo,
    Doing,
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::Doing, ColumnId::Done];

    fn index(self) -> usize {
        match self {
            ColumnId::Todo => 0,
            ColumnId::Doing => 1,
            ColumnId::Done => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Todo => "To do",
            ColumnId::Doing => "In progress",
            ColumnId::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    todo: Vec<Card>,
    doing: Vec<Card>,
    done: Vec<Card>,
}

impl Board {
    pub fn load(storage: &dyn Storage) -> Self {
        load_json(storage, STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        save_json(storage, STORAGE_KEY, self)
    }

    pub fn column(&self, column: ColumnId) -> &[Card] {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::Doing => &self.doing,
            ColumnId::Done => &self.done,
        }
    }

    fn column_mut(&mut self, column: ColumnId) -> &mut Vec<Card> {
        match column {
            ColumnId::Todo => &mut self.todo,
            ColumnId::Doing => &mut self.doing,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Add a card with the trimmed text; blank text adds nothing.
    pub fn add_card(
        &mut self,
        storage: &mut dyn Storage,
        column: ColumnId,
        text: &str,
    ) -> Result<Option<Uuid>, StorageError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let card = Card {
            id: Uuid::new_v4(),
            text: text.to_string(),
        };
        let id = card.id;
        self.column_mut(column).push(card);
        self.save(storage)?;
        Ok(Some(id))
    }

    pub fn remove_card(
        &mut self,
        storage: &mut dyn Storage,
        column: ColumnId,
        id: Uuid,
    ) -> Result<bool, StorageError> {
        let cards = self.column_mut(column);
        let before = cards.len();
        cards.retain(|card| card.id != id);
        if self.column(column).len() == before {
            return Ok(false);
        }
        self.save(storage)?;
        Ok(true)
    }

    /// Move a card `step` columns to the right (negative = left), appending
    /// it to the target column. Out-of-range targets are a no-op.
    pub fn shift_card(
        &mut self,
        storage: &mut dyn Storage,
        column: ColumnId,
        id: Uuid,
        step: i32,
    ) -> Result<bool, StorageError> {
        let target = column.index() as i32 + step;
        if !(0..ColumnId::ALL.len() as i32).contains(&target) {
            return Ok(false);
        }
        let target = ColumnId::ALL[target as usize];

        let cards = self.column_mut(column);
        let Some(position) = cards.iter().position(|card| card.id == id) else {
            return Ok(false);
        };
        let card = cards.remove(position);
        self.column_mut(target).push(card);
        self.save(storage)?;
        Ok(true)
    }

    /// (done, total) card counts across the board.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.todo.len() + self.doing.len() + self.done.len();
        (self.done.len(), total)
    }
}
