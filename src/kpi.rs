//! Dashboard aggregates over the persisted widgets.

use serde::Serialize;

use crate::board::{self, Board};
use crate::budget::BudgetTable;
use crate::deliverables::{self, Deliverable, DeliverableStatus};
use crate::risks::{self, Risk, SeverityLevel};
use crate::storage::{load_json, Storage};

/// Board completion: done/total cards and the rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressKpi {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskKpi {
    pub count: usize,
    pub critical: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliverableKpi {
    pub done: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub progress: ProgressKpi,
    pub budget_total: f64,
    pub risks: RiskKpi,
    pub deliverables: DeliverableKpi,
}

/// Read the persisted widget states and compute the dashboard numbers.
/// The budget table is passed in directly since it is never persisted.
pub fn collect(storage: &dyn Storage, budget: &BudgetTable) -> Dashboard {
    let board: Board = load_json(storage, board::STORAGE_KEY).unwrap_or_default();
    let (done, total) = board.progress();
    let percent = if total > 0 {
        ((done as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let risk_rows: Vec<Risk> = load_json(storage, risks::STORAGE_KEY).unwrap_or_default();
    let critical = risk_rows
        .iter()
        .filter(|risk| risk.severity_level() == SeverityLevel::Critical)
        .count();
    let high = risk_rows
        .iter()
        .filter(|risk| risk.severity_level() == SeverityLevel::High)
        .count();

    let deliverable_rows: Vec<Deliverable> =
        load_json(storage, deliverables::STORAGE_KEY).unwrap_or_default();
    let deliverables_done = deliverable_rows
        .iter()
        .filter(|row| row.status == DeliverableStatus::Done)
        .count();

    Dashboard {
        progress: ProgressKpi {
            done,
            total,
            percent,
        },
        budget_total: budget.totals().budget,
        risks: RiskKpi {
            count: risk_rows.len(),
            critical,
            high,
        },
        deliverables: DeliverableKpi {
            done: deliverables_done,
            total: deliverable_rows.len(),
        },
    }
}
