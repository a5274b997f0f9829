//! Forward/backward-pass schedule computation.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::models::Task;

use super::graph::TaskGraph;
use super::types::{ScheduleResult, ScheduleRow, TaskTiming};

/// Compute a full CPM/PERT schedule for the given task list.
///
/// Deterministic, side-effect-free and total: a graph that cannot be fully
/// ordered (cycle, self-dependency, unresolved or duplicated code) is
/// reported through `has_cycle_or_unresolved` on the result, never as an
/// error. Tasks excluded from the ordering come back with `timing: None`.
pub fn compute(tasks: &[Task]) -> ScheduleResult {
    let graph = TaskGraph::build(tasks);
    let order = topological_order(&graph);

    // Fewer ordered nodes than task records means a cycle, an unresolved
    // reference, or a code collision folding two records into one node.
    let has_cycle_or_unresolved = order.len() != tasks.len();

    let mut earliest_start: FxHashMap<&str, f64> =
        FxHashMap::with_capacity_and_hasher(order.len(), Default::default());
    let mut earliest_finish: FxHashMap<&str, f64> =
        FxHashMap::with_capacity_and_hasher(order.len(), Default::default());

    // Forward pass: earliest times, dependencies before dependents.
    for code in &order {
        let Some(task) = graph.by_code.get(code.as_str()) else {
            continue;
        };
        let duration = task.effective_duration();

        let mut start = 0.0;
        if let Some(deps) = graph.deps.get(code.as_str()) {
            for dep in deps {
                let dep_finish = earliest_finish.get(dep.as_str()).copied().unwrap_or(0.0);
                if dep_finish > start {
                    start = dep_finish;
                }
            }
        }

        earliest_start.insert(code, start);
        earliest_finish.insert(code, start + duration);
    }

    let mut project_duration = 0.0;
    for code in &order {
        let finish = earliest_finish.get(code.as_str()).copied().unwrap_or(0.0);
        if finish > project_duration {
            project_duration = finish;
        }
    }

    let mut latest_start: FxHashMap<&str, f64> =
        FxHashMap::with_capacity_and_hasher(order.len(), Default::default());
    let mut latest_finish: FxHashMap<&str, f64> =
        FxHashMap::with_capacity_and_hasher(order.len(), Default::default());

    // Backward pass: latest times, dependents before dependencies. A
    // successor without a computed latest start (it was never ordered)
    // contributes the project duration instead.
    for code in order.iter().rev() {
        let Some(task) = graph.by_code.get(code.as_str()) else {
            continue;
        };
        let duration = task.effective_duration();

        let mut finish = f64::MAX;
        if let Some(successors) = graph.successors.get(code.as_str()) {
            for successor in successors {
                let successor_start = latest_start
                    .get(successor.as_str())
                    .copied()
                    .unwrap_or(project_duration);
                if successor_start < finish {
                    finish = successor_start;
                }
            }
        }
        if finish == f64::MAX {
            finish = project_duration;
        }

        latest_finish.insert(code, finish);
        latest_start.insert(code, finish - duration);
    }

    let rows = tasks
        .iter()
        .map(|task| {
            let key = task.code_key();
            let timing = match (
                earliest_start.get(key),
                earliest_finish.get(key),
                latest_start.get(key),
                latest_finish.get(key),
            ) {
                (Some(&es), Some(&ef), Some(&ls), Some(&lf)) => Some(TaskTiming {
                    earliest_start: es,
                    earliest_finish: ef,
                    latest_start: ls,
                    latest_finish: lf,
                    slack: ls - es,
                }),
                _ => None,
            };
            ScheduleRow {
                task: task.clone(),
                timing,
            }
        })
        .collect();

    debug!(
        tasks = tasks.len(),
        ordered = order.len(),
        project_duration,
        flagged = has_cycle_or_unresolved,
        "schedule recomputed"
    );

    ScheduleResult {
        rows,
        project_duration,
        has_cycle_or_unresolved,
        unresolved_codes: graph.unresolved,
    }
}

/// Kahn's algorithm over the task graph.
///
/// The queue is seeded with zero in-degree codes in first-occurrence order
/// and drained FIFO, so the ordering is deterministic for a given input
/// list order. Nodes without an in-degree entry (referenced-but-unknown
/// codes) are never enqueued, which leaves everything downstream of them
/// unordered.
fn topological_order(graph: &TaskGraph<'_>) -> Vec<String> {
    let mut in_degree = graph.in_degree.clone();

    let mut queue: VecDeque<String> = graph
        .codes
        .iter()
        .filter(|code| in_degree.get(code.as_str()) == Some(&0))
        .cloned()
        .collect();

    let mut order: Vec<String> = Vec::with_capacity(graph.codes.len());

    while let Some(code) = queue.pop_front() {
        if let Some(successors) = graph.successors.get(code.as_str()) {
            for successor in successors {
                if let Some(degree) = in_degree.get_mut(successor.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(successor.clone());
                    }
                }
            }
        }
        order.push(code);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(code: &str, duration: f64, deps: &str) -> Task {
        Task::new(code, format!("task {code}"), duration, deps)
    }

    fn timing(result: &ScheduleResult, code: &str) -> TaskTiming {
        result
            .rows
            .iter()
            .find(|row| row.task.code_key() == code)
            .and_then(|row| row.timing)
            .unwrap_or_else(|| panic!("no timing for {code}"))
    }

    #[test]
    fn test_linear_chain() {
        let tasks = vec![
            make_task("A", 2.0, ""),
            make_task("B", 3.0, "A"),
            make_task("C", 5.0, "B"),
        ];
        let result = compute(&tasks);

        assert!(!result.has_cycle_or_unresolved);
        assert_eq!(result.project_duration, 10.0);

        let a = timing(&result, "A");
        assert_eq!((a.earliest_start, a.earliest_finish), (0.0, 2.0));
        let b = timing(&result, "B");
        assert_eq!((b.earliest_start, b.earliest_finish), (2.0, 5.0));
        let c = timing(&result, "C");
        assert_eq!((c.earliest_start, c.earliest_finish), (5.0, 10.0));

        // Everything is on the critical path.
        assert_eq!(result.critical_codes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_diamond_with_slack() {
        let tasks = vec![
            make_task("A", 2.0, ""),
            make_task("B", 3.0, "A"),
            make_task("C", 1.0, "A"),
            make_task("D", 4.0, "B,C"),
        ];
        let result = compute(&tasks);

        assert!(!result.has_cycle_or_unresolved);
        assert_eq!(result.project_duration, 9.0);

        let b = timing(&result, "B");
        assert_eq!((b.earliest_start, b.earliest_finish), (2.0, 5.0));
        assert_eq!(b.slack, 0.0);

        let c = timing(&result, "C");
        assert_eq!((c.earliest_start, c.earliest_finish), (2.0, 3.0));
        // LS(C) = LF(C) - 1 = LS(D) - 1 = 5 - 1 = 4; slack = 4 - 2 = 2.
        assert_eq!(c.latest_start, 4.0);
        assert_eq!(c.slack, 2.0);

        let d = timing(&result, "D");
        assert_eq!((d.earliest_start, d.earliest_finish), (5.0, 9.0));
        assert_eq!(d.slack, 0.0);

        assert_eq!(result.critical_codes(), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_direct_cycle_blocks_both_tasks() {
        let tasks = vec![make_task("A", 1.0, "B"), make_task("B", 1.0, "A")];
        let result = compute(&tasks);

        assert!(result.has_cycle_or_unresolved);
        assert_eq!(result.project_duration, 0.0);
        assert!(result.rows.iter().all(|row| row.timing.is_none()));
        assert!(result.unresolved_codes.is_empty());
    }

    #[test]
    fn test_self_dependency_is_a_one_node_cycle() {
        let tasks = vec![make_task("A", 1.0, "A"), make_task("B", 2.0, "")];
        let result = compute(&tasks);

        assert!(result.has_cycle_or_unresolved);
        assert!(result.rows[0].timing.is_none());
        // B is unaffected and still schedules.
        let b = timing(&result, "B");
        assert_eq!((b.earliest_start, b.earliest_finish), (0.0, 2.0));
        assert_eq!(result.project_duration, 2.0);
    }

    #[test]
    fn test_unresolved_dependency_flagged_like_a_cycle() {
        let tasks = vec![make_task("A", 1.0, "Z")];
        let result = compute(&tasks);

        assert!(result.has_cycle_or_unresolved);
        assert!(result.rows[0].timing.is_none());
        assert_eq!(result.project_duration, 0.0);
        assert_eq!(result.unresolved_codes, vec!["Z"]);
    }

    #[test]
    fn test_unresolved_dependency_blocks_transitively() {
        let tasks = vec![make_task("A", 1.0, "Z"), make_task("B", 1.0, "A")];
        let result = compute(&tasks);

        assert!(result.has_cycle_or_unresolved);
        assert!(result.rows.iter().all(|row| row.timing.is_none()));
        assert_eq!(result.unresolved_codes, vec!["Z"]);
    }

    #[test]
    fn test_zero_tasks() {
        let result = compute(&[]);
        assert!(result.rows.is_empty());
        assert_eq!(result.project_duration, 0.0);
        assert!(!result.has_cycle_or_unresolved);
        assert!(result.unresolved_codes.is_empty());
    }

    #[test]
    fn test_negative_duration_treated_as_zero() {
        let tasks = vec![make_task("A", -5.0, ""), make_task("B", 3.0, "A")];
        let result = compute(&tasks);

        let a = timing(&result, "A");
        assert_eq!((a.earliest_start, a.earliest_finish), (0.0, 0.0));
        let b = timing(&result, "B");
        assert_eq!((b.earliest_start, b.earliest_finish), (0.0, 3.0));
        assert_eq!(result.project_duration, 3.0);
    }

    #[test]
    fn test_idempotent_for_unchanged_input() {
        let tasks = vec![
            make_task("A", 2.0, ""),
            make_task("B", 3.0, "A"),
            make_task("C", 1.0, "A"),
            make_task("D", 4.0, "B,C"),
        ];
        let first = compute(&tasks);
        let second = compute(&tasks);

        assert_eq!(first.project_duration, second.project_duration);
        assert_eq!(
            first.has_cycle_or_unresolved,
            second.has_cycle_or_unresolved
        );
        assert_eq!(first.unresolved_codes, second.unresolved_codes);
        for (a, b) in first.rows.iter().zip(second.rows.iter()) {
            assert_eq!(a.task, b.task);
            assert_eq!(a.timing, b.timing);
        }
    }

    #[test]
    fn test_duplicate_codes_resolve_against_last_record() {
        // Two tasks claim code "A"; the dependent sees the last record's
        // duration, and the collision itself raises the validity flag
        // because two records share one graph node.
        let tasks = vec![
            make_task("A", 2.0, ""),
            make_task("A", 7.0, ""),
            make_task("B", 1.0, "A"),
        ];
        let result = compute(&tasks);

        assert!(result.has_cycle_or_unresolved);
        let b = timing(&result, "B");
        assert_eq!((b.earliest_start, b.earliest_finish), (7.0, 8.0));
        // Both records with code "A" read the shared node's timing.
        let a_timings: Vec<_> = result
            .rows
            .iter()
            .filter(|row| row.task.code_key() == "A")
            .map(|row| row.timing)
            .collect();
        assert_eq!(a_timings.len(), 2);
        assert_eq!(a_timings[0], a_timings[1]);
        assert!(a_timings[0].is_some());
    }

    #[test]
    fn test_dependency_whitespace_and_blanks_ignored() {
        let tasks = vec![
            make_task("A", 2.0, ""),
            make_task("B", 3.0, " A , ,"),
        ];
        let result = compute(&tasks);

        assert!(!result.has_cycle_or_unresolved);
        let b = timing(&result, "B");
        assert_eq!((b.earliest_start, b.earliest_finish), (2.0, 5.0));
    }

    #[test]
    fn test_ordering_deterministic_for_input_order() {
        // Independent roots schedule identically but the pass is stable,
        // so repeated runs agree on every derived value.
        let tasks = vec![
            make_task("X", 1.0, ""),
            make_task("Y", 2.0, ""),
            make_task("Z", 3.0, "X,Y"),
        ];
        let first = compute(&tasks);
        let second = compute(&tasks);
        for (a, b) in first.rows.iter().zip(second.rows.iter()) {
            assert_eq!(a.timing, b.timing);
        }
        assert_eq!(first.project_duration, 5.0);
    }

    #[test]
    fn test_partial_block_keeps_valid_portion() {
        // C is stuck behind an unresolved code; A and B still compute and
        // bound the project duration.
        let tasks = vec![
            make_task("A", 2.0, ""),
            make_task("B", 4.0, "A"),
            make_task("C", 1.0, "Q"),
        ];
        let result = compute(&tasks);

        assert!(result.has_cycle_or_unresolved);
        assert_eq!(result.project_duration, 6.0);
        assert!(timing(&result, "B").is_critical());
        assert!(result.rows[2].timing.is_none());
        assert_eq!(result.unresolved_codes, vec!["Q"]);
    }

    #[test]
    fn test_fractional_durations_keep_critical_path() {
        let tasks = vec![
            make_task("A", 0.5, ""),
            make_task("B", 1.25, "A"),
            make_task("C", 0.25, "A"),
            make_task("D", 2.0, "B,C"),
        ];
        let result = compute(&tasks);

        assert_eq!(result.project_duration, 3.75);
        assert_eq!(result.critical_codes(), vec!["A", "B", "D"]);
        assert_eq!(timing(&result, "C").slack, 1.0);
    }
}
