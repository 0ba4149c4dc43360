// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Maximum valid start hour, inclusive.
pub(crate) const MAX_START_HOUR: u8 = 23;

/// A day on which a class can be scheduled, Monday through Saturday.
///
/// Sunday is deliberately absent: it is not part of the schedulable week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Weekday {
    /// Monday.
    #[serde(rename = "MO")]
    #[cfg_attr(feature = "clap", clap(name = "mo"))]
    Mo,

    /// Tuesday.
    #[serde(rename = "TU")]
    #[cfg_attr(feature = "clap", clap(name = "tu"))]
    Tu,

    /// Wednesday.
    #[serde(rename = "WE")]
    #[cfg_attr(feature = "clap", clap(name = "we"))]
    We,

    /// Thursday.
    #[serde(rename = "TH")]
    #[cfg_attr(feature = "clap", clap(name = "th"))]
    Th,

    /// Friday.
    #[serde(rename = "FR")]
    #[cfg_attr(feature = "clap", clap(name = "fr"))]
    Fr,

    /// Saturday.
    #[serde(rename = "SA")]
    #[cfg_attr(feature = "clap", clap(name = "sa"))]
    Sa,
}

const DAY_MO: &str = "MO";
const DAY_TU: &str = "TU";
const DAY_WE: &str = "WE";
const DAY_TH: &str = "TH";
const DAY_FR: &str = "FR";
const DAY_SA: &str = "SA";

impl AsRef<str> for Weekday {
    fn as_ref(&self) -> &str {
        match self {
            Weekday::Mo => DAY_MO,
            Weekday::Tu => DAY_TU,
            Weekday::We => DAY_WE,
            Weekday::Th => DAY_TH,
            Weekday::Fr => DAY_FR,
            Weekday::Sa => DAY_SA,
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Weekday {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            DAY_MO => Ok(Weekday::Mo),
            DAY_TU => Ok(Weekday::Tu),
            DAY_WE => Ok(Weekday::We),
            DAY_TH => Ok(Weekday::Th),
            DAY_FR => Ok(Weekday::Fr),
            DAY_SA => Ok(Weekday::Sa),
            _ => Err(()),
        }
    }
}

/// One weekly recurring time slot assigned to a course.
///
/// Occupies `[start_hour, start_hour + duration_hours)` on `day`. The fields
/// are private so an invalid block (zero duration, start hour past the end of
/// the day) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBlock {
    day: Weekday,
    start_hour: u8,
    duration_hours: u8,
    room: Option<String>,
}

impl ScheduleBlock {
    /// Creates a block, rejecting values outside the field domains.
    pub fn new(day: Weekday, start_hour: u8, duration_hours: u8) -> Result<Self, ValidationError> {
        if start_hour > MAX_START_HOUR {
            return Err(ValidationError::StartHourOutOfRange(start_hour));
        }
        if duration_hours < 1 {
            return Err(ValidationError::ZeroDuration);
        }

        Ok(Self {
            day,
            start_hour,
            duration_hours,
            room: None,
        })
    }

    /// Attaches a room label. Empty strings normalize to no room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        let room = room.into();
        self.room = (!room.is_empty()).then_some(room);
        self
    }

    /// The day this block recurs on.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// The hour the block starts, inclusive.
    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// How many whole hours the block lasts. Always at least 1.
    pub fn duration_hours(&self) -> u8 {
        self.duration_hours
    }

    /// The hour the block ends, exclusive.
    pub fn end_hour(&self) -> u8 {
        self.start_hour + self.duration_hours
    }

    /// The room label, if one was assigned.
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub(crate) fn set_day(&mut self, day: Weekday) {
        self.day = day;
    }

    pub(crate) fn set_start_hour(&mut self, start_hour: u8) -> Result<(), ValidationError> {
        if start_hour > MAX_START_HOUR {
            return Err(ValidationError::StartHourOutOfRange(start_hour));
        }
        self.start_hour = start_hour;
        Ok(())
    }

    pub(crate) fn set_duration_hours(&mut self, duration_hours: u8) -> Result<(), ValidationError> {
        if duration_hours < 1 {
            return Err(ValidationError::ZeroDuration);
        }
        self.duration_hours = duration_hours;
        Ok(())
    }

    pub(crate) fn set_room(&mut self, room: String) {
        self.room = (!room.is_empty()).then_some(room);
    }
}

/// A field update or construction that violated its domain.
///
/// Raised at the editing boundary, before any state changes; conflict
/// detection never sees an invalid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The start hour is not within `0..=23`.
    StartHourOutOfRange(u8),

    /// The duration is zero; a block must last at least one hour.
    ZeroDuration,

    /// The block index does not point at an existing block.
    IndexOutOfBounds(usize),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::StartHourOutOfRange(hour) => {
                write!(f, "start hour {hour} is outside 0..=23")
            }
            ValidationError::ZeroDuration => {
                write!(f, "a block must last at least one hour")
            }
            ValidationError::IndexOutOfBounds(index) => {
                write!(f, "no block at index {index}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
