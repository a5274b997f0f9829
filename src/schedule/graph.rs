//! Dependency-graph construction for the schedule engine.

use rustc_hash::FxHashMap;

use crate::models::Task;

/// Adjacency view of one task list.
///
/// Nodes are trimmed task codes plus any referenced code that matches no
/// task. A referenced-but-unknown code gets successor edges but no
/// in-degree entry, so it can never be ordered and permanently blocks its
/// dependents. When two tasks share a code the last record wins the
/// code->task and code->deps slots, while edges and in-degree counts still
/// accumulate per record.
pub(crate) struct TaskGraph<'a> {
    /// Unique task codes in first-occurrence order.
    pub codes: Vec<String>,
    /// Trimmed code -> task record (last write wins).
    pub by_code: FxHashMap<String, &'a Task>,
    /// Trimmed code -> parsed dependency codes (last write wins).
    pub deps: FxHashMap<String, Vec<String>>,
    /// Node -> dependent task codes, in registration order.
    pub successors: FxHashMap<String, Vec<String>>,
    /// Task code -> number of incoming dependency edges.
    pub in_degree: FxHashMap<String, usize>,
    /// Referenced codes with no matching task, sorted and deduplicated.
    pub unresolved: Vec<String>,
}

impl<'a> TaskGraph<'a> {
    pub fn build(tasks: &'a [Task]) -> Self {
        let mut codes: Vec<String> = Vec::with_capacity(tasks.len());
        let mut by_code: FxHashMap<String, &Task> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        let mut deps: FxHashMap<String, Vec<String>> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        let mut successors: FxHashMap<String, Vec<String>> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        let mut in_degree: FxHashMap<String, usize> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());

        // Register every task code as a node first, so a task whose code is
        // referenced before it appears in the list still resolves.
        for task in tasks {
            let code = task.code_key();
            if !in_degree.contains_key(code) {
                codes.push(code.to_string());
            }
            by_code.insert(code.to_string(), task);
            in_degree.insert(code.to_string(), 0);
            successors.entry(code.to_string()).or_default();
        }

        let mut unresolved: Vec<String> = Vec::new();
        for task in tasks {
            let code = task.code_key();
            let parsed = task.dependency_codes();
            for dep in &parsed {
                if !by_code.contains_key(dep.as_str()) {
                    unresolved.push(dep.clone());
                }
                successors
                    .entry(dep.clone())
                    .or_default()
                    .push(code.to_string());
                *in_degree.entry(code.to_string()).or_insert(0) += 1;
            }
            deps.insert(code.to_string(), parsed);
        }

        unresolved.sort();
        unresolved.dedup();

        Self {
            codes,
            by_code,
            deps,
            successors,
            in_degree,
            unresolved,
        }
    }
}
