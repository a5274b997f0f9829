//! Core task record for the project-network scheduler.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A schedulable task as entered by the user.
///
/// `code` is the label other tasks reference in their dependency text;
/// `deps` keeps the raw delimited text so edits round-trip unchanged.
/// Neither is validated here: empty or colliding codes are a modeling
/// issue the schedule engine reports as data, not a reason to reject
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub duration: f64,
    pub deps: String,
}

impl Task {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        duration: f64,
        deps: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            duration,
            deps: deps.into(),
        }
    }

    /// Graph-node key: the code with surrounding whitespace removed.
    pub fn code_key(&self) -> &str {
        self.code.trim()
    }

    /// Predecessor codes parsed from the raw dependency text.
    pub fn dependency_codes(&self) -> Vec<String> {
        parse_dependencies(&self.deps)
    }

    /// Duration with malformed values normalized away: negative, NaN and
    /// infinite estimates all schedule as zero work units.
    pub fn effective_duration(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            0.0
        }
    }
}

/// Split a comma-delimited dependency field into trimmed, non-empty codes,
/// preserving their order.
pub fn parse_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a duration text field, normalizing non-numeric or negative input
/// to zero.
pub fn parse_duration(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dependencies_trims_and_drops_blanks() {
        assert_eq!(parse_dependencies("A, B ,,C"), vec!["A", "B", "C"]);
        assert_eq!(parse_dependencies(""), Vec::<String>::new());
        assert_eq!(parse_dependencies(" , "), Vec::<String>::new());
    }

    #[test]
    fn test_parse_dependencies_preserves_order() {
        assert_eq!(parse_dependencies("C,A,B"), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_parse_duration_normalizes_bad_input() {
        assert_eq!(parse_duration("5"), 5.0);
        assert_eq!(parse_duration(" 2.5 "), 2.5);
        assert_eq!(parse_duration("abc"), 0.0);
        assert_eq!(parse_duration("-5"), 0.0);
        assert_eq!(parse_duration(""), 0.0);
        assert_eq!(parse_duration("inf"), 0.0);
    }

    #[test]
    fn test_effective_duration_clamps_negative() {
        let mut task = Task::new("A", "Scoping", -5.0, "");
        assert_eq!(task.effective_duration(), 0.0);
        task.duration = f64::NAN;
        assert_eq!(task.effective_duration(), 0.0);
        task.duration = 3.0;
        assert_eq!(task.effective_duration(), 3.0);
    }

    #[test]
    fn test_code_key_trims() {
        let task = Task::new("  A ", "Scoping", 2.0, "");
        assert_eq!(task.code_key(), "A");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("A", "x", 1.0, "");
        let b = Task::new("A", "x", 1.0, "");
        assert_ne!(a.id, b.id);
    }
}
