// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::block::{ScheduleBlock, ValidationError, Weekday};
use crate::course::{EnrolledCourse, EnrollmentStatus, ScheduleRecord};

/// Upper bound on blocks a draft will accept.
///
/// A product constraint on editing, not a detector limit: a draft loaded
/// from committed data may carry more, but `add_block` will not go past it.
pub const MAX_BLOCKS: usize = 3;

const DEFAULT_DAY: Weekday = Weekday::Mo;
const DEFAULT_START_HOUR: u8 = 18;
const DEFAULT_DURATION_HOURS: u8 = 2;

/// The in-progress schedule for one course being created or edited.
///
/// Owns the ordered block list and the pointer to the block currently being
/// edited. The list is never empty: a course with an active schedule keeps
/// at least one block, so `active_index` is always in bounds.
///
/// The draft never persists itself; the caller commits or discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSchedule {
    blocks: Vec<ScheduleBlock>,
    active_index: usize,
}

impl DraftSchedule {
    /// A fresh draft with the default single block (Monday 18:00, 2 h).
    pub fn new() -> Self {
        Self {
            blocks: vec![default_block()],
            active_index: 0,
        }
    }

    /// A draft over previously committed blocks.
    ///
    /// An empty input falls back to the default single block.
    pub fn from_blocks(blocks: Vec<ScheduleBlock>) -> Self {
        if blocks.is_empty() {
            return Self::new();
        }

        Self {
            blocks,
            active_index: 0,
        }
    }

    /// A draft for editing an enrolled course's committed schedule.
    ///
    /// Normalizes through [`EnrolledCourse::to_blocks`], so the legacy flat
    /// single-slot shape loads the same as a `blocks` array.
    pub fn from_course(course: &EnrolledCourse) -> Self {
        Self::from_blocks(course.to_blocks())
    }

    /// The blocks in editing order.
    pub fn blocks(&self) -> &[ScheduleBlock] {
        &self.blocks
    }

    /// Index of the block currently targeted by editing.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The block currently targeted by editing.
    pub fn active_block(&self) -> &ScheduleBlock {
        &self.blocks[self.active_index]
    }

    /// Appends a default block and makes it active.
    ///
    /// Returns `false` without changing anything when the draft is full.
    pub fn add_block(&mut self) -> bool {
        if self.blocks.len() >= MAX_BLOCKS {
            tracing::debug!("draft already has {MAX_BLOCKS} blocks, ignoring add");
            return false;
        }

        self.blocks.push(default_block());
        self.active_index = self.blocks.len() - 1;
        true
    }

    /// Removes the block at `index`, clamping the active pointer back into
    /// bounds.
    ///
    /// Returns `false` without changing anything when only one block remains
    /// or `index` points at nothing.
    pub fn remove_block(&mut self, index: usize) -> bool {
        if self.blocks.len() <= 1 {
            tracing::debug!("draft has a single block, ignoring remove");
            return false;
        }
        if index >= self.blocks.len() {
            return false;
        }

        self.blocks.remove(index);
        self.active_index = self.active_index.min(self.blocks.len() - 1);
        true
    }

    /// Replaces exactly one field of the block at `index`.
    ///
    /// The field's own domain is validated first; on rejection the draft is
    /// left untouched.
    pub fn update_field(&mut self, index: usize, field: BlockField) -> Result<(), ValidationError> {
        let block = self
            .blocks
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfBounds(index))?;

        match field {
            BlockField::Day(day) => {
                block.set_day(day);
                Ok(())
            }
            BlockField::StartHour(hour) => block.set_start_hour(hour),
            BlockField::DurationHours(hours) => block.set_duration_hours(hours),
            BlockField::Room(room) => {
                block.set_room(room);
                Ok(())
            }
        }
    }

    /// Points editing at the block at `index`.
    pub fn set_active_index(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= self.blocks.len() {
            return Err(ValidationError::IndexOutOfBounds(index));
        }

        self.active_index = index;
        Ok(())
    }

    /// The wire records handed to the persistence layer on commit.
    ///
    /// A course whose status does not occupy the schedule commits the single
    /// all-null sentinel record instead of its blocks. Conflict gating is the
    /// caller's responsibility; this only shapes the payload.
    pub fn commit_records(&self, status: EnrollmentStatus) -> Vec<ScheduleRecord> {
        if !status.occupies_schedule() {
            return vec![ScheduleRecord::sentinel()];
        }

        self.blocks.iter().map(ScheduleRecord::from).collect()
    }
}

impl Default for DraftSchedule {
    fn default() -> Self {
        Self::new()
    }
}

fn default_block() -> ScheduleBlock {
    ScheduleBlock::new(DEFAULT_DAY, DEFAULT_START_HOUR, DEFAULT_DURATION_HOURS)
        .expect("default block is valid")
}

/// A single-field update applied to one draft block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockField {
    Day(Weekday),
    StartHour(u8),
    DurationHours(u8),
    Room(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_has_the_default_block() {
        let draft = DraftSchedule::new();
        assert_eq!(draft.blocks().len(), 1);
        assert_eq!(draft.active_index(), 0);

        let block = draft.active_block();
        assert_eq!(block.day(), Weekday::Mo);
        assert_eq!(block.start_hour(), 18);
        assert_eq!(block.duration_hours(), 2);
        assert_eq!(block.room(), None);
    }

    #[test]
    fn add_block_stops_at_the_bound() {
        let mut draft = DraftSchedule::new();
        for _ in 0..5 {
            draft.add_block();
        }
        assert_eq!(draft.blocks().len(), MAX_BLOCKS);
    }

    #[test]
    fn add_block_activates_the_new_block() {
        let mut draft = DraftSchedule::new();
        assert!(draft.add_block());
        assert_eq!(draft.active_index(), 1);
        assert!(draft.add_block());
        assert_eq!(draft.active_index(), 2);
        assert!(!draft.add_block());
        assert_eq!(draft.active_index(), 2);
    }

    #[test]
    fn remove_block_keeps_the_last_block() {
        let mut draft = DraftSchedule::new();
        assert!(!draft.remove_block(0));
        assert_eq!(draft.blocks().len(), 1);
    }

    #[test]
    fn remove_block_clamps_the_active_index() {
        let mut draft = DraftSchedule::new();
        draft.add_block();
        draft.add_block();
        assert_eq!(draft.active_index(), 2);

        assert!(draft.remove_block(2));
        assert_eq!(draft.blocks().len(), 2);
        assert_eq!(draft.active_index(), 1);
    }

    #[test]
    fn remove_block_ignores_a_bad_index() {
        let mut draft = DraftSchedule::new();
        draft.add_block();
        assert!(!draft.remove_block(7));
        assert_eq!(draft.blocks().len(), 2);
    }

    #[test]
    fn update_field_replaces_one_field() {
        let mut draft = DraftSchedule::new();
        draft.update_field(0, BlockField::Day(Weekday::Th)).unwrap();
        draft.update_field(0, BlockField::StartHour(8)).unwrap();
        draft.update_field(0, BlockField::DurationHours(3)).unwrap();
        draft
            .update_field(0, BlockField::Room("B-201".to_string()))
            .unwrap();

        let block = &draft.blocks()[0];
        assert_eq!(block.day(), Weekday::Th);
        assert_eq!(block.start_hour(), 8);
        assert_eq!(block.duration_hours(), 3);
        assert_eq!(block.room(), Some("B-201"));
    }

    #[test]
    fn update_field_rejects_domain_violations_without_partial_state() {
        let mut draft = DraftSchedule::new();
        let before = draft.clone();

        assert_eq!(
            draft.update_field(0, BlockField::DurationHours(0)),
            Err(ValidationError::ZeroDuration)
        );
        assert_eq!(
            draft.update_field(0, BlockField::StartHour(24)),
            Err(ValidationError::StartHourOutOfRange(24))
        );
        assert_eq!(
            draft.update_field(3, BlockField::StartHour(10)),
            Err(ValidationError::IndexOutOfBounds(3))
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn set_active_index_rejects_out_of_range() {
        let mut draft = DraftSchedule::new();
        draft.add_block();

        draft.set_active_index(0).unwrap();
        assert_eq!(draft.active_index(), 0);
        assert_eq!(
            draft.set_active_index(2),
            Err(ValidationError::IndexOutOfBounds(2))
        );
        assert_eq!(draft.active_index(), 0);
    }

    #[test]
    fn from_blocks_falls_back_to_the_default() {
        let draft = DraftSchedule::from_blocks(Vec::new());
        assert_eq!(draft, DraftSchedule::new());

        let blocks = vec![
            ScheduleBlock::new(Weekday::Tu, 9, 1).unwrap(),
            ScheduleBlock::new(Weekday::Fr, 14, 2).unwrap(),
        ];
        let draft = DraftSchedule::from_blocks(blocks.clone());
        assert_eq!(draft.blocks(), blocks.as_slice());
        assert_eq!(draft.active_index(), 0);
    }

    #[test]
    fn commit_records_mirror_the_blocks() {
        let mut draft = DraftSchedule::new();
        draft.add_block();
        draft.update_field(1, BlockField::Day(Weekday::We)).unwrap();

        let records = draft.commit_records(EnrollmentStatus::InProgress);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].day, Some(Weekday::Mo));
        assert_eq!(records[1].day, Some(Weekday::We));
        assert_eq!(records[1].hour, Some(18));
        assert_eq!(records[1].duration, Some(2));
        assert_eq!(records[1].room, None);
    }

    #[test]
    fn commit_records_collapse_to_the_sentinel_when_not_in_progress() {
        let draft = DraftSchedule::new();
        for status in [EnrollmentStatus::Pending, EnrollmentStatus::Passed] {
            let records = draft.commit_records(status);
            assert_eq!(records.len(), 1);
            assert!(records[0].is_sentinel());
        }
    }
}
