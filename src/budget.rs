//! Budget table: per-task amounts spread over a fixed month list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub task: String,
    pub budget: f64,
    /// Planned spend per month, same length as the table's month list.
    pub monthly: Vec<f64>,
}

/// Column totals derived from the rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub budget: f64,
    pub months: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetTable {
    months: Vec<String>,
    rows: Vec<BudgetRow>,
}

impl Default for BudgetTable {
    fn default() -> Self {
        let months = ["May", "June", "July", "August", "September", "October"]
            .map(String::from)
            .to_vec();
        let rows = vec![
            BudgetRow {
                task: "A".to_string(),
                budget: 20.0,
                monthly: vec![20.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
            BudgetRow {
                task: "B".to_string(),
                budget: 250.0,
                monthly: vec![0.0, 50.0, 100.0, 100.0, 0.0, 0.0],
            },
            BudgetRow {
                task: "C".to_string(),
                budget: 200.0,
                monthly: vec![0.0, 0.0, 0.0, 0.0, 80.0, 120.0],
            },
        ];
        Self { months, rows }
    }
}

impl BudgetTable {
    /// Empty table over a caller-chosen month list.
    pub fn new(months: Vec<String>) -> Self {
        Self {
            months,
            rows: Vec::new(),
        }
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn rows(&self) -> &[BudgetRow] {
        &self.rows
    }

    /// Append a zeroed row. Returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(BudgetRow {
            task: "New".to_string(),
            budget: 0.0,
            monthly: vec![0.0; self.months.len()],
        });
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn set_task(&mut self, index: usize, task: &str) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.task = task.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_budget(&mut self, index: usize, budget: f64) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.budget = budget;
                true
            }
            None => false,
        }
    }

    pub fn set_monthly(&mut self, index: usize, month: usize, amount: f64) -> bool {
        match self
            .rows
            .get_mut(index)
            .and_then(|row| row.monthly.get_mut(month))
        {
            Some(cell) => {
                *cell = amount;
                true
            }
            None => false,
        }
    }

    pub fn totals(&self) -> BudgetTotals {
        let budget = self.rows.iter().map(|row| row.budget).sum();
        let months = (0..self.months.len())
            .map(|month| {
                self.rows
                    .iter()
                    .map(|row| row.monthly.get(month).copied().unwrap_or(0.0))
                    .sum()
            })
            .collect();
        BudgetTotals { budget, months }
    }
}
