// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use colored::Color;
use cursus_core::{ConflictResult, DraftSchedule, EnrolledCourse, ScheduleBlock, ScheduleRecord};

use crate::parser::ArgOutputFormat;
use crate::table::{Column, PaddingDirection, Table};

/// Renders the enrolled-courses snapshot.
#[derive(Debug)]
pub struct CourseFormatter {
    columns: Vec<CourseColumn>,
    output_format: ArgOutputFormat,
}

impl CourseFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                CourseColumn::Id,
                CourseColumn::Status,
                CourseColumn::Name,
                CourseColumn::Schedule,
            ],
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn format(&self, courses: &[EnrolledCourse]) -> String {
        match self.output_format {
            ArgOutputFormat::Json => {
                serde_json::to_string_pretty(courses).unwrap_or_else(|e| e.to_string())
            }
            ArgOutputFormat::Table => Table::new(&self.columns, courses).render(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CourseColumn {
    Id,
    Status,
    Name,
    Schedule,
}

impl Column<EnrolledCourse> for CourseColumn {
    fn format(&self, course: &EnrolledCourse) -> String {
        match self {
            CourseColumn::Id => course.id.clone(),
            CourseColumn::Status => course.status.to_string(),
            CourseColumn::Name => course.name.clone(),
            CourseColumn::Schedule => {
                let blocks = course.to_blocks();
                if blocks.is_empty() {
                    "-".to_string()
                } else {
                    blocks
                        .iter()
                        .map(format_block)
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
        }
    }

    fn color(&self, course: &EnrolledCourse) -> Option<Color> {
        match self {
            CourseColumn::Status if course.status.occupies_schedule() => Some(Color::Green),
            _ => None,
        }
    }
}

/// Renders a draft session with per-block conflict evaluation.
#[derive(Debug)]
pub struct DraftFormatter {
    columns: Vec<DraftColumn>,
    output_format: ArgOutputFormat,
}

impl DraftFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                DraftColumn::Active,
                DraftColumn::Number,
                DraftColumn::Time,
                DraftColumn::Room,
                DraftColumn::Conflict,
            ],
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Renders the draft; `results` must hold one entry per block.
    pub fn format(&self, draft: &DraftSchedule, results: &[ConflictResult]) -> String {
        let rows: Vec<DraftRow> = draft
            .blocks()
            .iter()
            .zip(results)
            .enumerate()
            .map(|(index, (block, result))| DraftRow {
                number: index + 1,
                active: index == draft.active_index(),
                block: block.clone(),
                result: result.clone(),
            })
            .collect();

        match self.output_format {
            ArgOutputFormat::Json => {
                let records: Vec<DraftRowRecord> = rows.iter().map(DraftRowRecord::from).collect();
                serde_json::to_string_pretty(&records).unwrap_or_else(|e| e.to_string())
            }
            ArgOutputFormat::Table => Table::new(&self.columns, &rows).render(),
        }
    }
}

struct DraftRow {
    number: usize,
    active: bool,
    block: ScheduleBlock,
    result: ConflictResult,
}

#[derive(serde::Serialize)]
struct DraftRowRecord {
    block: ScheduleRecord,
    active: bool,
    conflict: Option<String>,
}

impl From<&DraftRow> for DraftRowRecord {
    fn from(row: &DraftRow) -> Self {
        Self {
            block: ScheduleRecord::from(&row.block),
            active: row.active,
            conflict: row.result.reason().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum DraftColumn {
    Active,
    Number,
    Time,
    Room,
    Conflict,
}

impl Column<DraftRow> for DraftColumn {
    fn format(&self, row: &DraftRow) -> String {
        match self {
            DraftColumn::Active => if row.active { ">" } else { " " }.to_string(),
            DraftColumn::Number => format!("Block {}", row.number),
            DraftColumn::Time => format_block(&row.block),
            DraftColumn::Room => row.block.room().unwrap_or("-").to_string(),
            DraftColumn::Conflict => match row.result.reason() {
                Some(reason) => reason.to_string(),
                None => "ok".to_string(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            DraftColumn::Number => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &DraftRow) -> Option<Color> {
        match self {
            DraftColumn::Conflict if row.result.is_conflict() => Some(Color::Red),
            DraftColumn::Conflict => Some(Color::Green),
            _ => None,
        }
    }
}

fn format_block(block: &ScheduleBlock) -> String {
    format!(
        "{} {:02}:00-{:02}:00",
        block.day(),
        block.start_hour(),
        block.end_hour()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursus_core::{BlockField, Weekday, evaluate_all, parse_snapshot};

    fn plain(s: String) -> String {
        // Strip ANSI escapes so assertions hold with colors enabled.
        String::from_utf8(strip_ansi_escapes(s.into_bytes())).unwrap()
    }

    fn strip_ansi_escapes(bytes: Vec<u8>) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len());
        let mut in_escape = false;
        for b in bytes {
            match (in_escape, b) {
                (false, 0x1b) => in_escape = true,
                (false, _) => out.push(b),
                (true, b'm') => in_escape = false,
                (true, _) => {}
            }
        }
        out
    }

    #[test]
    fn course_table_shows_the_committed_schedule() {
        let courses = parse_snapshot(
            r#"[
                {
                    "id": "alg-1", "name": "Algebra", "status": "in-progress",
                    "blocks": [
                        {"day": "MO", "hour": 18, "duration": 2, "room": null},
                        {"day": "WE", "hour": 18, "duration": 2, "room": null}
                    ]
                },
                {"id": "his-1", "name": "History", "status": "passed"}
            ]"#,
        )
        .unwrap();

        let rendered = plain(CourseFormatter::new().format(&courses));
        assert!(rendered.contains("alg-1"));
        assert!(rendered.contains("in-progress"));
        assert!(rendered.contains("MO 18:00-20:00, WE 18:00-20:00"));
        assert!(rendered.contains("History"));

        let mut lines = rendered.lines();
        assert!(lines.next().unwrap().starts_with("alg-1"));
        assert!(lines.next().unwrap().starts_with("his-1"));
    }

    #[test]
    fn draft_table_marks_the_active_block_and_conflicts() {
        let mut draft = DraftSchedule::new();
        draft.add_block();
        draft.update_field(1, BlockField::StartHour(19)).unwrap();

        let results = evaluate_all(draft.blocks(), &[], None);
        let rendered = plain(DraftFormatter::new().format(&draft, &results));

        assert!(rendered.contains("Block 1"));
        assert!(rendered.contains(">  Block 2"));
        assert!(rendered.contains("Overlaps with Block 2"));
        assert!(rendered.contains("MO 19:00-21:00"));
    }

    #[test]
    fn draft_json_carries_the_conflict_text() {
        let mut draft = DraftSchedule::new();
        draft.add_block();
        draft.update_field(1, BlockField::Day(Weekday::Tu)).unwrap();
        draft
            .update_field(1, BlockField::Room("Lab 1".to_string()))
            .unwrap();

        let results = evaluate_all(draft.blocks(), &[], None);
        let json = DraftFormatter::new()
            .with_output_format(ArgOutputFormat::Json)
            .format(&draft, &results);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["conflict"], serde_json::Value::Null);
        assert_eq!(value[1]["active"], serde_json::Value::Bool(true));
        assert_eq!(value[1]["block"]["day"], "TU");
        assert_eq!(value[1]["block"]["room"], "Lab 1");
    }
}
