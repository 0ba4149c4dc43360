// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::Command;
use colored::Colorize;
use cursus_core::evaluate_all;

use crate::cmd_draft::show_draft;
use crate::parser::ArgOutputFormat;
use crate::planner::Planner;
use crate::schedule_formatter::CourseFormatter;

/// The default command: enrolled courses plus the open draft, if any.
#[derive(Debug, Clone, Copy)]
pub struct CmdStatus;

impl CmdStatus {
    pub const NAME: &str = "status";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show enrolled courses and the open draft")
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Generating status overview...");

        println!("📚 {}", "Courses".bold());
        let courses = planner.courses()?;
        if courses.is_empty() {
            println!("{}", "No courses found".italic());
        } else {
            print!("{}", CourseFormatter::new().format(&courses));
        }

        let Some(session) = planner.load_session()? else {
            return Ok(());
        };

        println!();
        show_draft(planner, &session, ArgOutputFormat::Table)?;

        let draft = session.to_draft();
        let results = evaluate_all(draft.blocks(), &courses, session.course_id.as_deref());
        let conflicts = results.iter().filter(|r| r.is_conflict()).count();
        if conflicts > 0 {
            println!(
                "{} {conflicts} block(s) conflict; the draft cannot be committed",
                "Warning:".yellow()
            );
        }
        Ok(())
    }
}
