// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The `draft` subcommand family: one editing session per course, persisted
//! between invocations. Every mutation re-evaluates the whole draft against
//! a fresh snapshot, and commit refuses to proceed while any block
//! conflicts.

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use cursus_core::{BlockField, EnrollmentStatus, Weekday, evaluate_all};

use crate::parser::{
    ArgOutputFormat, arg_block, arg_block_optional, arg_day, arg_duration, arg_room, arg_start,
    get_block, get_block_optional, get_day, get_duration, get_room, get_start,
};
use crate::planner::Planner;
use crate::schedule_formatter::DraftFormatter;
use crate::session::DraftSession;

#[derive(Debug, Clone)]
pub struct CmdDraftNew {
    pub course_id: Option<String>,
    pub name: Option<String>,
    pub status: EnrollmentStatus,
}

impl CmdDraftNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open an editing session for a course's weekly schedule")
            .arg(arg!(course_id: [COURSE_ID] "Id of the enrolled course to edit"))
            .arg(arg!(-n --name <NAME> "Name for a course not in the snapshot yet"))
            .arg(
                arg!(--status <STATUS> "Enrollment status for a new course")
                    .value_parser(value_parser!(EnrollmentStatus))
                    .default_value("in-progress"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let course_id: Option<String> = matches.get_one("course_id").cloned();
        let name: Option<String> = matches.get_one("name").cloned();
        if course_id.is_some() == name.is_some() {
            return Err("Pass either a COURSE_ID or --name, not both".into());
        }

        Ok(Self {
            course_id,
            name,
            status: matches
                .get_one("status")
                .copied()
                .unwrap_or(EnrollmentStatus::InProgress),
        })
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Opening draft session...");
        if let Some(previous) = planner.load_session()? {
            println!(
                "{} replacing the open draft for {}",
                "Note:".yellow(),
                previous.course_name
            );
        }

        let session = match &self.course_id {
            Some(id) => {
                let courses = planner.courses()?;
                let course = courses
                    .iter()
                    .find(|course| course.id == *id)
                    .ok_or_else(|| format!("No enrolled course with id {id}"))?;
                DraftSession::open_for(course)
            }
            None => {
                let name = self.name.expect("name is present when course_id is not");
                DraftSession::open_new(name, self.status)
            }
        };

        planner.save_session(&session)?;
        show_draft(planner, &session, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDraftAdd;

impl CmdDraftAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Append a block to the draft and make it active")
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        let mut session = planner.require_session()?;
        let mut draft = session.to_draft();

        if !draft.add_block() {
            println!(
                "{} the schedule is full ({} blocks)",
                "Note:".yellow(),
                draft.blocks().len()
            );
        }

        session.update_from(&draft);
        planner.save_session(&session)?;
        show_draft(planner, &session, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDraftRemove {
    pub index: usize,
}

impl CmdDraftRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove a block from the draft")
            .arg(arg_block())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            index: get_block(matches),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        let mut session = planner.require_session()?;
        let mut draft = session.to_draft();

        if !draft.remove_block(self.index) {
            if draft.blocks().len() <= 1 {
                println!(
                    "{} a schedule keeps at least one block; use `draft discard` to drop the session",
                    "Note:".yellow()
                );
            } else {
                println!("{} no block {}", "Note:".yellow(), self.index + 1);
            }
        }

        session.update_from(&draft);
        planner.save_session(&session)?;
        show_draft(planner, &session, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone)]
pub struct CmdDraftSet {
    pub index: Option<usize>,
    pub day: Option<Weekday>,
    pub start: Option<u8>,
    pub duration: Option<u8>,
    pub room: Option<String>,
}

impl CmdDraftSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Update fields of a block, defaulting to the active one")
            .arg(arg_block_optional())
            .arg(arg_day())
            .arg(arg_start())
            .arg(arg_duration())
            .arg(arg_room())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let cmd = Self {
            index: get_block_optional(matches),
            day: get_day(matches),
            start: get_start(matches),
            duration: get_duration(matches),
            room: get_room(matches),
        };

        if cmd.day.is_none() && cmd.start.is_none() && cmd.duration.is_none() && cmd.room.is_none()
        {
            return Err("Nothing to update; pass --day, --start, --duration or --room".into());
        }
        Ok(cmd)
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        let mut session = planner.require_session()?;
        let mut draft = session.to_draft();
        let index = self.index.unwrap_or(draft.active_index());

        let fields = [
            self.day.map(BlockField::Day),
            self.start.map(BlockField::StartHour),
            self.duration.map(BlockField::DurationHours),
            self.room.map(BlockField::Room),
        ];
        for field in fields.into_iter().flatten() {
            draft
                .update_field(index, field)
                .map_err(|e| format!("Invalid update for block {}: {e}", index + 1))?;
        }

        session.update_from(&draft);
        planner.save_session(&session)?;
        show_draft(planner, &session, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDraftSelect {
    pub index: usize,
}

impl CmdDraftSelect {
    pub const NAME: &str = "select";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Point editing at another block")
            .arg(arg_block())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            index: get_block(matches),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        let mut session = planner.require_session()?;
        let mut draft = session.to_draft();

        draft
            .set_active_index(self.index)
            .map_err(|e| format!("Cannot select block {}: {e}", self.index + 1))?;

        session.update_from(&draft);
        planner.save_session(&session)?;
        show_draft(planner, &session, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDraftShow {
    pub output_format: ArgOutputFormat,
}

impl CmdDraftShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the draft with per-block conflict evaluation")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        let session = planner.require_session()?;
        show_draft(planner, &session, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdDraftCommit {
    pub output: Option<PathBuf>,
}

impl CmdDraftCommit {
    pub const NAME: &str = "commit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Validate the draft and emit the schedule records")
            .arg(
                arg!(-o --output [FILE] "Write the records to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output: matches.get_one("output").cloned(),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Committing draft...");
        let session = planner.require_session()?;
        let draft = session.to_draft();

        let courses = planner.courses()?;
        let results = evaluate_all(draft.blocks(), &courses, session.course_id.as_deref());
        let conflicts: Vec<_> = results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| result.reason().map(|reason| (index, reason)))
            .collect();

        if !conflicts.is_empty() {
            for (index, reason) in conflicts {
                println!("{} Block {}: {reason}", "Conflict:".red(), index + 1);
            }
            return Err("the draft has conflicts; resolve them before committing".into());
        }

        let records = draft.commit_records(session.status);
        let json = serde_json::to_string_pretty(&records)?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, json)
                    .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
                println!("Wrote {} record(s) to {}", records.len(), path.display());
            }
            None => println!("{json}"),
        }

        planner.clear_session()?;
        tracing::debug!("committed {} records for {}", records.len(), session.course_name);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDraftDiscard;

impl CmdDraftDiscard {
    pub const NAME: &str = "discard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Drop the editing session without committing")
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        match planner.load_session()? {
            Some(session) => {
                planner.clear_session()?;
                println!("Discarded the draft for {}", session.course_name);
            }
            None => println!("{}", "No draft session open".italic()),
        }
        Ok(())
    }
}

/// Re-evaluates the draft against a fresh snapshot and prints it.
pub fn show_draft(
    planner: &Planner,
    session: &DraftSession,
    output_format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    let draft = session.to_draft();
    let courses = planner.courses()?;
    let results = evaluate_all(draft.blocks(), &courses, session.course_id.as_deref());

    if output_format == ArgOutputFormat::Table {
        println!("{}", format!("Draft: {}", session.course_name).bold());
    }
    let formatter = DraftFormatter::new().with_output_format(output_format);
    print!("{}", formatter.format(&draft, &results));
    Ok(())
}
