//! Per-course hide/pin filtering, applied to a choice group before enumeration.
//!
//! The enumerator has no notion of hidden or pinned sections. Those selections
//! are resolved here, as a pure `CourseChoiceGroup -> CourseChoiceGroup`
//! transform, into the plain list of eligible sections the search consumes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::section::CourseChoiceGroup;

/// The user's hide/pin state for one course.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceFilter {
    /// Section ids the user has hidden from consideration.
    pub hidden: BTreeSet<String>,
    /// Section id the user has pinned, if any.
    pub pinned: Option<String>,
}

impl ChoiceFilter {
    pub fn hide(mut self, id: impl Into<String>) -> Self {
        self.hidden.insert(id.into());
        self
    }

    pub fn pin(mut self, id: impl Into<String>) -> Self {
        self.pinned = Some(id.into());
        self
    }

    /// Resolve this filter against a group.
    ///
    /// 1. Cancelled sections are always dropped.
    /// 2. A pin naming one of the remaining sections reduces the group to
    ///    exactly that section, even if it is also hidden.
    /// 3. Otherwise hidden sections are dropped, keeping the original order.
    ///
    /// A pin naming a section that is absent or cancelled is ignored.
    pub fn apply(&self, group: &CourseChoiceGroup) -> CourseChoiceGroup {
        let active = group.sections.iter().filter(|s| !s.cancelled);

        if let Some(pinned) = &self.pinned {
            if let Some(section) = active.clone().find(|s| &s.id == pinned) {
                return CourseChoiceGroup::new(group.course.clone(), vec![section.clone()]);
            }
        }

        let sections = active
            .filter(|s| !self.hidden.contains(&s.id))
            .cloned()
            .collect();
        CourseChoiceGroup::new(group.course.clone(), sections)
    }
}

impl CourseChoiceGroup {
    /// Shorthand for [`ChoiceFilter::apply`].
    pub fn filtered(&self, filter: &ChoiceFilter) -> CourseChoiceGroup {
        filter.apply(self)
    }
}
