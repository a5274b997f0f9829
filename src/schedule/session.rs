//! Last-call-wins wrapper around the schedule engine.
//!
//! The engine itself carries no staleness token, so callers that fire a
//! recompute per keystroke need a way to drop results that were overtaken
//! by a newer edit. The session stamps every recompute with a monotonic
//! revision and keeps only the newest result.

use crate::models::Task;

use super::compute::compute;
use super::types::ScheduleResult;

#[derive(Debug, Default)]
pub struct ScheduleSession {
    revision: u64,
    latest: Option<(u64, ScheduleResult)>,
}

impl ScheduleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the given snapshot under a fresh revision and return
    /// that revision. The stored result always reflects the newest call.
    pub fn recompute(&mut self, tasks: &[Task]) -> u64 {
        self.revision += 1;
        let result = compute(tasks);
        self.latest = Some((self.revision, result));
        self.revision
    }

    /// Newest issued revision; zero before the first recompute.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when `revision` no longer identifies the newest result, i.e.
    /// whatever the caller derived from it should be discarded.
    pub fn is_superseded(&self, revision: u64) -> bool {
        revision < self.revision
    }

    /// Newest result together with its revision stamp.
    pub fn latest(&self) -> Option<(u64, &ScheduleResult)> {
        self.latest.as_ref().map(|(revision, result)| (*revision, result))
    }
}
