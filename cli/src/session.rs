// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The on-disk editing session.
//!
//! The session file stands in for the mobile app's in-memory editing state:
//! it carries the course being edited, its draft blocks, and the active
//! block between CLI invocations. It is not the commit payload; that is
//! produced by [`DraftSchedule::commit_records`] when the session closes.

use cursus_core::{DraftSchedule, EnrolledCourse, EnrollmentStatus, ScheduleRecord};

/// A draft editing session for one course.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DraftSession {
    /// Id of the course being edited, absent when scheduling a course that
    /// does not exist in the snapshot yet.
    pub course_id: Option<String>,

    /// Display name of the course.
    pub course_name: String,

    /// Enrollment status the schedule will be committed under.
    pub status: EnrollmentStatus,

    /// The draft blocks in editing order.
    pub blocks: Vec<ScheduleRecord>,

    /// Index of the block currently targeted by editing.
    pub active_index: usize,
}

impl DraftSession {
    /// Opens a session over an enrolled course's committed schedule.
    pub fn open_for(course: &EnrolledCourse) -> Self {
        let mut session = Self {
            course_id: Some(course.id.clone()),
            course_name: course.name.clone(),
            status: course.status,
            blocks: Vec::new(),
            active_index: 0,
        };
        session.update_from(&DraftSchedule::from_course(course));
        session
    }

    /// Opens a session for a course that is not in the snapshot yet.
    pub fn open_new(name: impl Into<String>, status: EnrollmentStatus) -> Self {
        let mut session = Self {
            course_id: None,
            course_name: name.into(),
            status,
            blocks: Vec::new(),
            active_index: 0,
        };
        session.update_from(&DraftSchedule::new());
        session
    }

    /// Rebuilds the draft store from the persisted session.
    pub fn to_draft(&self) -> DraftSchedule {
        let mut draft =
            DraftSchedule::from_blocks(self.blocks.iter().filter_map(ScheduleRecord::to_block).collect());

        // The active index clamps rather than fails: a hand-edited or stale
        // session file should not wedge the whole session.
        let index = self.active_index.min(draft.blocks().len() - 1);
        draft
            .set_active_index(index)
            .expect("clamped index is in bounds");
        draft
    }

    /// Records the draft store back into the session.
    pub fn update_from(&mut self, draft: &DraftSchedule) {
        self.blocks = draft.blocks().iter().map(ScheduleRecord::from).collect();
        self.active_index = draft.active_index();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursus_core::{BlockField, Weekday};

    #[test]
    fn new_session_starts_with_the_default_block() {
        let session = DraftSession::open_new("Algebra", EnrollmentStatus::InProgress);
        assert_eq!(session.course_id, None);
        assert_eq!(session.blocks.len(), 1);
        assert_eq!(session.blocks[0].day, Some(Weekday::Mo));
        assert_eq!(session.active_index, 0);
    }

    #[test]
    fn session_round_trips_the_draft() {
        let mut session = DraftSession::open_new("Algebra", EnrollmentStatus::InProgress);

        let mut draft = session.to_draft();
        draft.add_block();
        draft.update_field(1, BlockField::Day(Weekday::Fr)).unwrap();
        session.update_from(&draft);

        assert_eq!(session.blocks.len(), 2);
        assert_eq!(session.active_index, 1);
        assert_eq!(session.to_draft(), draft);
    }

    #[test]
    fn stale_active_index_clamps_on_load() {
        let mut session = DraftSession::open_new("Algebra", EnrollmentStatus::InProgress);
        session.active_index = 9;

        let draft = session.to_draft();
        assert_eq!(draft.active_index(), 0);
    }

    #[test]
    fn session_survives_serde() {
        let session = DraftSession::open_new("Algebra", EnrollmentStatus::InProgress);
        let json = serde_json::to_string(&session).unwrap();
        let reloaded: DraftSession = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.course_name, "Algebra");
        assert_eq!(reloaded.to_draft(), session.to_draft());
    }
}
