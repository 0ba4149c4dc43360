// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

mod block;
mod conflict;
mod course;
mod draft;

pub use crate::block::{ScheduleBlock, ValidationError, Weekday};
pub use crate::conflict::{ConflictReason, ConflictResult, evaluate, evaluate_all, overlaps};
pub use crate::course::{EnrolledCourse, EnrollmentStatus, ScheduleRecord, parse_snapshot};
pub use crate::draft::{BlockField, DraftSchedule, MAX_BLOCKS};
