//! Conflict-free timetable enumeration.
//!
//! Depth-first search over one [`CourseChoiceGroup`] per course. At course `i`
//! the candidates of `groups[i]` are tried in their given order; a candidate
//! that conflicts with the partial assignment is pruned immediately, so whole
//! subtrees are skipped instead of being rejected after full assignment.
//!
//! The search keeps an explicit stack of `(course index, partial assignment)`
//! frames. Each frame owns its own partial list, so there is no shared
//! accumulator to undo on backtrack. Children are pushed in reverse candidate
//! order, which makes the pop order (and therefore the result order) the same
//! as a recursive DFS over the given ordering.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::conflict::section_conflicts;
use crate::section::{CandidateSection, CourseChoiceGroup, Timetable};

/// Result cap used when the caller does not pick one.
pub const DEFAULT_CAP: NonZeroUsize = match NonZeroUsize::new(1_000_000) {
    Some(cap) => cap,
    None => unreachable!(),
};

/// How often (in visited nodes) the wall-clock budget is checked.
const CLOCK_CHECK_INTERVAL: u64 = 1024;

/// Limits for one enumeration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerateOptions {
    /// Stop as soon as this many timetables have been found.
    pub cap: NonZeroUsize,
    /// Give up after visiting this many search nodes.
    pub max_nodes: Option<u64>,
    /// Give up after this much wall-clock time.
    #[serde(rename = "time_budget_ms", with = "millis")]
    pub time_budget: Option<Duration>,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            max_nodes: None,
            time_budget: None,
        }
    }
}

impl EnumerateOptions {
    pub fn new(cap: NonZeroUsize) -> Self {
        Self {
            cap,
            ..Self::default()
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Why a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Every combination was examined; the result list is complete.
    Exhausted,
    /// The result cap was hit. More timetables may exist.
    CapReached,
    /// A node or time budget ran out before the search finished. The result
    /// list is a prefix of the full answer and must not be presented as
    /// complete.
    Truncated(TruncationReason),
}

/// Which budget cut a search short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationReason {
    NodeBudget,
    TimeBudget,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Frames popped off the search stack.
    pub nodes_visited: u64,
    /// Candidates rejected because they conflicted with the partial assignment.
    pub branches_pruned: u64,
}

/// Timetables found by [`enumerate_with`], plus how the search ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enumeration {
    pub timetables: Vec<Timetable>,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl Enumeration {
    /// True when the list holds every conflict-free timetable.
    pub fn is_complete(&self) -> bool {
        self.outcome == SearchOutcome::Exhausted
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Truncated(_))
    }
}

/// Enumerate conflict-free timetables, at most `cap` of them.
///
/// Returns one timetable per combination of one section per course whose
/// meetings never conflict, in depth-first order over the given candidate
/// ordering. No courses yields exactly one, empty, timetable; any empty group
/// yields no timetables at all.
pub fn enumerate(groups: &[CourseChoiceGroup], cap: NonZeroUsize) -> Vec<Timetable> {
    enumerate_with(groups, &EnumerateOptions::new(cap)).timetables
}

/// Enumerate conflict-free timetables under the given limits.
///
/// Like [`enumerate`], but also reports whether the search ran to completion,
/// stopped at the cap, or was cut short by a node/time budget.
pub fn enumerate_with(groups: &[CourseChoiceGroup], options: &EnumerateOptions) -> Enumeration {
    tracing::debug!(
        courses = groups.len(),
        cap = options.cap.get(),
        max_nodes = ?options.max_nodes,
        time_budget = ?options.time_budget,
        "enumerating timetables"
    );

    if let Some(empty) = groups.iter().find(|g| g.is_empty()) {
        tracing::debug!(course = %empty.course, "course has no eligible sections");
        return Enumeration {
            timetables: Vec::new(),
            outcome: SearchOutcome::Exhausted,
            stats: SearchStats::default(),
        };
    }

    let enumeration = Search::new(groups, options).run();

    match enumeration.outcome {
        SearchOutcome::Truncated(reason) => tracing::warn!(
            ?reason,
            found = enumeration.timetables.len(),
            nodes = enumeration.stats.nodes_visited,
            "timetable search truncated"
        ),
        outcome => tracing::debug!(
            ?outcome,
            found = enumeration.timetables.len(),
            nodes = enumeration.stats.nodes_visited,
            pruned = enumeration.stats.branches_pruned,
            "timetable search finished"
        ),
    }

    enumeration
}

/// One pending point of the search: the next course to fill and the sections
/// already chosen for the courses before it.
struct Frame<'a> {
    course: usize,
    partial: Vec<&'a CandidateSection>,
}

struct Search<'a> {
    groups: &'a [CourseChoiceGroup],
    options: &'a EnumerateOptions,
    // Only read when a time budget is set; `Instant::now` is unavailable on
    // some targets (wasm32-unknown-unknown).
    deadline: Option<Instant>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(groups: &'a [CourseChoiceGroup], options: &'a EnumerateOptions) -> Self {
        Self {
            groups,
            options,
            deadline: options.time_budget.map(|budget| Instant::now() + budget),
            stats: SearchStats::default(),
        }
    }

    fn run(mut self) -> Enumeration {
        let groups = self.groups;
        let cap = self.options.cap.get();
        let mut timetables = Vec::new();
        let mut stack = vec![Frame {
            course: 0,
            partial: Vec::with_capacity(groups.len()),
        }];

        while let Some(frame) = stack.pop() {
            if let Some(reason) = self.budget_exhausted() {
                return self.finish(timetables, SearchOutcome::Truncated(reason));
            }
            self.stats.nodes_visited += 1;

            if frame.course == groups.len() {
                timetables.push(Timetable {
                    sections: frame.partial.into_iter().cloned().collect(),
                });
                if timetables.len() == cap {
                    return self.finish(timetables, SearchOutcome::CapReached);
                }
                continue;
            }

            let candidates = &groups[frame.course].sections;
            for candidate in candidates.iter().rev() {
                if section_conflicts(candidate, frame.partial.iter().copied()) {
                    self.stats.branches_pruned += 1;
                    continue;
                }
                let mut partial = Vec::with_capacity(groups.len());
                partial.extend_from_slice(&frame.partial);
                partial.push(candidate);
                stack.push(Frame {
                    course: frame.course + 1,
                    partial,
                });
            }
        }

        self.finish(timetables, SearchOutcome::Exhausted)
    }

    fn budget_exhausted(&self) -> Option<TruncationReason> {
        if let Some(max_nodes) = self.options.max_nodes {
            if self.stats.nodes_visited >= max_nodes {
                return Some(TruncationReason::NodeBudget);
            }
        }
        if let Some(deadline) = self.deadline {
            if self.stats.nodes_visited % CLOCK_CHECK_INTERVAL == 0 && Instant::now() >= deadline
            {
                return Some(TruncationReason::TimeBudget);
            }
        }
        None
    }

    fn finish(self, timetables: Vec<Timetable>, outcome: SearchOutcome) -> Enumeration {
        Enumeration {
            timetables,
            outcome,
            stats: self.stats,
        }
    }
}

/// Serde adapter for an optional [`Duration`] expressed in whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&(d.as_millis() as u64)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
