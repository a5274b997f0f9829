//! Risk register: probability x impact rows with derived severity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{load_json, save_json, Storage, StorageError};

pub const STORAGE_KEY: &str = "risks_v1";

/// Probability and impact are scored on the usual 1-5 scale.
const SCALE_MIN: u8 = 1;
const SCALE_MAX: u8 = 5;

/// Severity bucket for a probability x impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            16.. => SeverityLevel::Critical,
            9..=15 => SeverityLevel::High,
            4..=8 => SeverityLevel::Medium,
            _ => SeverityLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
            SeverityLevel::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub id: Uuid,
    pub description: String,
    pub probability: u8,
    pub impact: u8,
    pub action: String,
    pub owner: String,
}

impl Risk {
    pub fn severity(&self) -> u8 {
        self.probability * self.impact
    }

    pub fn severity_level(&self) -> SeverityLevel {
        SeverityLevel::from_score(self.severity())
    }
}

#[derive(Debug, Clone)]
pub struct RiskRegister {
    rows: Vec<Risk>,
}

impl RiskRegister {
    pub fn load(storage: &dyn Storage) -> Self {
        let rows = load_json(storage, STORAGE_KEY).unwrap_or_else(starter_rows);
        Self { rows }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        save_json(storage, STORAGE_KEY, &self.rows)
    }

    pub fn rows(&self) -> &[Risk] {
        &self.rows
    }

    /// Append a blank minimum-severity row and persist.
    pub fn add(&mut self, storage: &mut dyn Storage) -> Result<Uuid, StorageError> {
        let risk = Risk {
            id: Uuid::new_v4(),
            description: String::new(),
            probability: SCALE_MIN,
            impact: SCALE_MIN,
            action: String::new(),
            owner: String::new(),
        };
        let id = risk.id;
        self.rows.push(risk);
        self.save(storage)?;
        Ok(id)
    }

    pub fn remove(&mut self, storage: &mut dyn Storage, id: Uuid) -> Result<bool, StorageError> {
        let before = self.rows.len();
        self.rows.retain(|risk| risk.id != id);
        if self.rows.len() == before {
            return Ok(false);
        }
        self.save(storage)?;
        Ok(true)
    }

    pub fn set_description(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        description: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |risk| risk.description = description.to_string())
    }

    pub fn set_action(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        action: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |risk| risk.action = action.to_string())
    }

    pub fn set_owner(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        owner: &str,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |risk| risk.owner = owner.to_string())
    }

    /// Set probability, clamped to the 1-5 scale, and persist.
    pub fn set_probability(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        probability: u8,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |risk| {
            risk.probability = probability.clamp(SCALE_MIN, SCALE_MAX)
        })
    }

    /// Set impact, clamped to the 1-5 scale, and persist.
    pub fn set_impact(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        impact: u8,
    ) -> Result<bool, StorageError> {
        self.edit(storage, id, |risk| {
            risk.impact = impact.clamp(SCALE_MIN, SCALE_MAX)
        })
    }

    fn edit(
        &mut self,
        storage: &mut dyn Storage,
        id: Uuid,
        apply: impl FnOnce(&mut Risk),
    ) -> Result<bool, StorageError> {
        let Some(risk) = self.rows.iter_mut().find(|risk| risk.id == id) else {
            return Ok(false);
        };
        apply(risk);
        self.save(storage)?;
        Ok(true)
    }
}

fn starter_rows() -> Vec<Risk> {
    vec![Risk {
        id: Uuid::new_v4(),
        description: "Requirements sign-off slips".to_string(),
        probability: 3,
        impact: 4,
        action: "Schedule a scoping workshop and confirm the perimeter".to_string(),
        owner: "Project lead".to_string(),
    }]
}
