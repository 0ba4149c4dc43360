// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The read-only snapshot of enrolled courses and its wire shapes.
//!
//! The snapshot is supplied by the surrounding application on every conflict
//! check and is never mutated here. Courses that predate multi-block
//! schedules carry a flat `day/hour/duration/room` record instead of a
//! `blocks` array; [`EnrolledCourse::to_blocks`] is the single place that
//! expands the legacy shape.

use std::{fmt::Display, str::FromStr};

use crate::block::{ScheduleBlock, Weekday};

/// The enrollment state of a course in the current term.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EnrollmentStatus {
    /// Enrolled but not yet attending.
    #[default]
    #[serde(rename = "pending")]
    Pending,

    /// Actively attending this term. The only status that occupies
    /// weekly time slots.
    #[serde(rename = "in-progress")]
    InProgress,

    /// Completed in a previous term.
    #[serde(rename = "passed")]
    Passed,
}

const STATUS_PENDING: &str = "pending";
const STATUS_IN_PROGRESS: &str = "in-progress";
const STATUS_PASSED: &str = "passed";

impl EnrollmentStatus {
    /// Whether a course in this status occupies its weekly time slots.
    ///
    /// This is the one canonical predicate: conflict detection and commit
    /// payloads must agree on it.
    pub fn occupies_schedule(&self) -> bool {
        matches!(self, EnrollmentStatus::InProgress)
    }
}

impl AsRef<str> for EnrollmentStatus {
    fn as_ref(&self) -> &str {
        match self {
            EnrollmentStatus::Pending => STATUS_PENDING,
            EnrollmentStatus::InProgress => STATUS_IN_PROGRESS,
            EnrollmentStatus::Passed => STATUS_PASSED,
        }
    }
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_PENDING => Ok(EnrollmentStatus::Pending),
            STATUS_IN_PROGRESS => Ok(EnrollmentStatus::InProgress),
            STATUS_PASSED => Ok(EnrollmentStatus::Passed),
            _ => Err(()),
        }
    }
}

/// On-wire shape of one schedule slot.
///
/// Every field is nullable: the all-null record is the sentinel the
/// persistence layer stores for a course with no active schedule.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleRecord {
    pub day: Option<Weekday>,
    pub hour: Option<u8>,
    pub duration: Option<u8>,
    pub room: Option<String>,
}

impl ScheduleRecord {
    /// The all-null "no schedule" sentinel.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Whether this is the all-null sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.day.is_none() && self.hour.is_none() && self.duration.is_none() && self.room.is_none()
    }

    /// Parses the record into a validated block.
    ///
    /// Returns `None` for the sentinel and for records whose fields fail
    /// validation; malformed committed data must never reach conflict logic.
    pub fn to_block(&self) -> Option<ScheduleBlock> {
        let (day, hour, duration) = match (self.day, self.hour, self.duration) {
            (Some(day), Some(hour), Some(duration)) => (day, hour, duration),
            _ => return None,
        };

        match ScheduleBlock::new(day, hour, duration) {
            Ok(block) => Some(match &self.room {
                Some(room) => block.with_room(room.clone()),
                None => block,
            }),
            Err(e) => {
                tracing::warn!("skipping malformed schedule record ({day} {hour}h): {e}");
                None
            }
        }
    }
}

impl From<&ScheduleBlock> for ScheduleRecord {
    fn from(block: &ScheduleBlock) -> Self {
        Self {
            day: Some(block.day()),
            hour: Some(block.start_hour()),
            duration: Some(block.duration_hours()),
            room: block.room().map(str::to_owned),
        }
    }
}

/// One course of the enrolled-courses snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EnrolledCourse {
    /// Backend identifier, unique within the snapshot.
    pub id: String,

    /// Display name shown in conflict reasons.
    pub name: String,

    /// Enrollment status; defaults to pending when the snapshot omits it.
    #[serde(default)]
    pub status: EnrollmentStatus,

    /// Committed multi-block schedule.
    #[serde(default)]
    pub blocks: Vec<ScheduleRecord>,

    /// Legacy flat single-slot fields, present on courses persisted before
    /// multi-block schedules existed.
    #[serde(flatten)]
    pub legacy: ScheduleRecord,
}

impl EnrolledCourse {
    /// The committed occupancy of this course as validated blocks.
    ///
    /// A non-empty `blocks` array wins; otherwise the legacy flat record
    /// expands into a one-element list; otherwise the course occupies
    /// nothing.
    pub fn to_blocks(&self) -> Vec<ScheduleBlock> {
        let blocks: Vec<_> = self.blocks.iter().filter_map(ScheduleRecord::to_block).collect();
        if !blocks.is_empty() {
            return blocks;
        }

        self.legacy.to_block().into_iter().collect()
    }
}

/// Parses an enrolled-courses snapshot from its JSON form.
pub fn parse_snapshot(json: &str) -> Result<Vec<EnrolledCourse>, serde_json::Error> {
    serde_json::from_str(json)
}
