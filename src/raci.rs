//! Responsibility matrix: actors x activities with R/A/C/I assignments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaciRole {
    #[serde(rename = "R")]
    Responsible,
    #[serde(rename = "A")]
    Accountable,
    #[serde(rename = "C")]
    Consulted,
    #[serde(rename = "I")]
    Informed,
}

impl RaciRole {
    pub fn as_str(self) -> &'static str {
        match self {
            RaciRole::Responsible => "R",
            RaciRole::Accountable => "A",
            RaciRole::Consulted => "C",
            RaciRole::Informed => "I",
        }
    }
}

/// The matrix is kept rectangular: after any structural edit the cell grid
/// is resized to `activities x actors`, padding with empty cells and
/// truncating removed rows/columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaciMatrix {
    actors: Vec<String>,
    activities: Vec<String>,
    cells: Vec<Vec<Option<RaciRole>>>,
}

impl Default for RaciMatrix {
    fn default() -> Self {
        let actors = ["Avery", "Blake", "Casey"].map(String::from).to_vec();
        let activities = [
            "Review current state",
            "Define user expectations",
            "Define content expectations",
        ]
        .map(String::from)
        .to_vec();
        let cells = activities
            .iter()
            .map(|_| vec![None; actors.len()])
            .collect();
        Self {
            actors,
            activities,
            cells,
        }
    }
}

impl RaciMatrix {
    pub fn new(actors: Vec<String>, activities: Vec<String>) -> Self {
        let mut matrix = Self {
            actors,
            activities,
            cells: Vec::new(),
        };
        matrix.resize_cells();
        matrix
    }

    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    pub fn cell(&self, activity: usize, actor: usize) -> Option<RaciRole> {
        self.cells.get(activity).and_then(|row| row.get(actor)).copied().flatten()
    }

    /// Add an actor column; blank names are refused.
    pub fn add_actor(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.actors.push(name.to_string());
        self.resize_cells();
        true
    }

    /// Remove an actor column and its assignments. The last actor cannot
    /// be removed.
    pub fn remove_actor(&mut self, actor: usize) -> bool {
        if actor >= self.actors.len() || self.actors.len() <= 1 {
            return false;
        }
        self.actors.remove(actor);
        for row in &mut self.cells {
            if actor < row.len() {
                row.remove(actor);
            }
        }
        self.resize_cells();
        true
    }

    /// Add an activity row with a placeholder title. Returns its index.
    pub fn add_activity(&mut self) -> usize {
        self.activities.push("New activity".to_string());
        self.resize_cells();
        self.activities.len() - 1
    }

    pub fn remove_activity(&mut self, activity: usize) -> bool {
        if activity >= self.activities.len() {
            return false;
        }
        self.activities.remove(activity);
        self.cells.remove(activity);
        true
    }

    pub fn rename_activity(&mut self, activity: usize, title: &str) -> bool {
        match self.activities.get_mut(activity) {
            Some(slot) => {
                *slot = title.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_cell(&mut self, activity: usize, actor: usize, role: Option<RaciRole>) -> bool {
        if activity >= self.activities.len() || actor >= self.actors.len() {
            return false;
        }
        self.resize_cells();
        self.cells[activity][actor] = role;
        true
    }

    fn resize_cells(&mut self) {
        self.cells
            .resize_with(self.activities.len(), Vec::new);
        for row in &mut self.cells {
            row.resize(self.actors.len(), None);
        }
    }
}
