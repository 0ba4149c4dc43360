// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::parser::ArgOutputFormat;
use crate::planner::Planner;
use crate::schedule_formatter::CourseFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdCourses {
    pub output_format: ArgOutputFormat,
}

impl CmdCourses {
    pub const NAME: &str = "courses";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("c")
            .about("List enrolled courses and their committed schedules")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Listing courses...");
        let courses = planner.courses()?;
        if courses.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No courses found".italic());
            return Ok(());
        }

        let formatter = CourseFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&courses));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn test_parse_courses() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdCourses::command());

        let matches = cmd
            .try_get_matches_from(["test", "courses", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("courses").unwrap();
        let parsed = CmdCourses::from(sub_matches);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }
}
