// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly schedule conflict detection.
//!
//! Pure functions over the draft blocks plus a snapshot of the other
//! enrolled courses. The snapshot is an explicit parameter on every call;
//! nothing here holds state, so re-evaluating after each edit is the
//! intended usage.

use std::fmt::Display;

use crate::block::{ScheduleBlock, Weekday};
use crate::course::EnrolledCourse;

/// Whether two blocks occupy intersecting time on the same day.
///
/// Half-open interval intersection on the hour axis, gated by exact day
/// equality. The comparisons are strict: a block ending at the hour another
/// begins does not conflict, so back-to-back classes are fine.
pub fn overlaps(a: &ScheduleBlock, b: &ScheduleBlock) -> bool {
    a.day() == b.day() && a.start_hour() < b.end_hour() && b.start_hour() < a.end_hour()
}

/// The outcome of checking one draft block against everything in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictResult {
    /// The block occupies free time.
    NoConflict,

    /// The block collides with the named entity.
    Conflict(ConflictReason),
}

impl ConflictResult {
    /// Whether this result blocks a save.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict(_))
    }

    /// The colliding entity, if any.
    pub fn reason(&self) -> Option<&ConflictReason> {
        match self {
            ConflictResult::NoConflict => None,
            ConflictResult::Conflict(reason) => Some(reason),
        }
    }
}

/// What a conflicting block collided with, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// Another block of the same draft, by its display number (1-based).
    DraftBlock { number: usize },

    /// A committed block of another in-progress course.
    Course {
        name: String,
        day: Weekday,
        start_hour: u8,
    },
}

impl Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictReason::DraftBlock { number } => {
                write!(f, "Overlaps with Block {number}")
            }
            ConflictReason::Course {
                name,
                day,
                start_hour,
            } => {
                write!(f, "Conflicts with {name} ({day} {start_hour}:00)")
            }
        }
    }
}

/// Checks the draft block at `index` against the rest of the draft and the
/// committed schedules of the other enrolled courses.
///
/// The draft is checked first: an internal collision is reported even when a
/// committed course would also collide with the same slot. Within each pass
/// the first overlap wins, in ascending index order for the draft and in
/// snapshot order for the courses.
///
/// `exclude_course_id` names the course being edited, so a course never
/// conflicts with its own committed copy. Courses whose status does not
/// occupy the schedule are invisible here.
///
/// Blocks are assumed validated; an out-of-range `index` evaluates to
/// [`ConflictResult::NoConflict`].
pub fn evaluate(
    blocks: &[ScheduleBlock],
    index: usize,
    other_courses: &[EnrolledCourse],
    exclude_course_id: Option<&str>,
) -> ConflictResult {
    let Some(block) = blocks.get(index) else {
        return ConflictResult::NoConflict;
    };

    for (i, other) in blocks.iter().enumerate() {
        if i != index && overlaps(block, other) {
            return ConflictResult::Conflict(ConflictReason::DraftBlock { number: i + 1 });
        }
    }

    for course in other_courses {
        if exclude_course_id.is_some_and(|id| id == course.id) {
            continue;
        }
        if !course.status.occupies_schedule() {
            continue;
        }

        for committed in course.to_blocks() {
            if overlaps(block, &committed) {
                return ConflictResult::Conflict(ConflictReason::Course {
                    name: course.name.clone(),
                    day: committed.day(),
                    start_hour: committed.start_hour(),
                });
            }
        }
    }

    ConflictResult::NoConflict
}

/// Evaluates every draft block independently.
///
/// Not incremental: each call recomputes from scratch, which is the point at
/// this data scale.
pub fn evaluate_all(
    blocks: &[ScheduleBlock],
    other_courses: &[EnrolledCourse],
    exclude_course_id: Option<&str>,
) -> Vec<ConflictResult> {
    (0..blocks.len())
        .map(|index| evaluate(blocks, index, other_courses, exclude_course_id))
        .collect()
}
