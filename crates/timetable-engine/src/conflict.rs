//! Detect overlapping meetings between sections.
//!
//! Two meeting patterns conflict when they share at least one weekday slot and
//! their time ranges overlap. Adjacent meetings (where one ends exactly when
//! another starts) are NOT conflicts. A pattern with an empty weekday mask or
//! an empty/reversed time range constrains nothing and never conflicts.
//!
//! Exam meetings are exempt from every check, including exam-vs-exam: two
//! finals at the same hour for two selected courses are not flagged. This is
//! the behavior schedules have always been built against, so it is kept
//! as-is rather than tightened.

use chrono::Weekday;
use serde::Serialize;

use crate::pattern::MeetingPattern;
use crate::section::CandidateSection;

/// Whether two meeting patterns occupy overlapping weekday/time space.
///
/// - Either pattern an `Exam` -> `false`.
/// - No weekday slot in common -> `false` (an all-`-` mask never conflicts).
/// - Either time range empty or reversed (`end <= start`) -> `false`.
/// - Otherwise `a.start < b.end && b.start < a.end`.
pub fn conflicts(a: &MeetingPattern, b: &MeetingPattern) -> bool {
    if a.kind.is_exam() || b.kind.is_exam() {
        return false;
    }
    if a.days.intersection(&b.days).is_empty() {
        return false;
    }
    if a.time.is_empty() || b.time.is_empty() {
        return false;
    }
    a.time.overlaps(&b.time)
}

/// Whether any meeting of `section` conflicts with any meeting of any
/// already-selected section.
pub fn section_conflicts<'a, I>(section: &CandidateSection, already_selected: I) -> bool
where
    I: IntoIterator<Item = &'a CandidateSection>,
{
    already_selected.into_iter().any(|other| {
        section
            .meetings
            .iter()
            .any(|a| other.meetings.iter().any(|b| conflicts(a, b)))
    })
}

/// A detected conflict between a meeting of the candidate section and a
/// meeting of a section already selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingConflict {
    /// Id of the already-selected section the candidate collides with.
    pub other_section: String,
    pub meeting: MeetingPattern,
    pub other_meeting: MeetingPattern,
    /// Weekdays on which both meetings fall.
    pub shared_days: Vec<Weekday>,
    pub overlap_minutes: u16,
}

/// Find every conflicting meeting pair between `section` and the sections
/// already selected.
///
/// Used for "does this section fit my current selection" previews; returns an
/// empty list exactly when [`section_conflicts`] is false. Pairs are reported
/// in selection order, then candidate meeting order, then other meeting order.
pub fn find_meeting_conflicts<'a, I>(
    section: &CandidateSection,
    already_selected: I,
) -> Vec<MeetingConflict>
where
    I: IntoIterator<Item = &'a CandidateSection>,
{
    let mut found = Vec::new();

    for other in already_selected {
        for a in &section.meetings {
            for b in &other.meetings {
                if conflicts(a, b) {
                    found.push(MeetingConflict {
                        other_section: other.id.clone(),
                        meeting: *a,
                        other_meeting: *b,
                        shared_days: a.days.intersection(&b.days).weekdays().collect(),
                        overlap_minutes: a.time.overlap_minutes(&b.time),
                    });
                }
            }
        }
    }

    found
}
