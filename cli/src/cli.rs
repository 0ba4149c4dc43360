// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};

use crate::cmd_courses::CmdCourses;
use crate::cmd_draft::{
    CmdDraftAdd, CmdDraftCommit, CmdDraftDiscard, CmdDraftNew, CmdDraftRemove, CmdDraftSelect,
    CmdDraftSet, CmdDraftShow,
};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_status::CmdStatus;
use crate::config::{APP_NAME, parse_config};
use crate::planner::Planner;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Plan your academic term: weekly course schedules with conflict detection.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to status
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/cursus/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/cursus/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdStatus::command())
            .subcommand(CmdCourses::command())
            .subcommand(
                Command::new("draft")
                    .alias("d")
                    .about("Edit one course's weekly schedule")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdDraftNew::command())
                    .subcommand(CmdDraftAdd::command())
                    .subcommand(CmdDraftRemove::command())
                    .subcommand(CmdDraftSet::command())
                    .subcommand(CmdDraftSelect::command())
                    .subcommand(CmdDraftShow::command())
                    .subcommand(CmdDraftCommit::command())
                    .subcommand(CmdDraftDiscard::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdStatus::NAME, _)) => Status(CmdStatus),
            Some((CmdCourses::NAME, matches)) => Courses(CmdCourses::from(matches)),
            Some(("draft", matches)) => match matches.subcommand() {
                Some((CmdDraftNew::NAME, matches)) => DraftNew(CmdDraftNew::from(matches)?),
                Some((CmdDraftAdd::NAME, _)) => DraftAdd(CmdDraftAdd),
                Some((CmdDraftRemove::NAME, matches)) => DraftRemove(CmdDraftRemove::from(matches)),
                Some((CmdDraftSet::NAME, matches)) => DraftSet(CmdDraftSet::from(matches)?),
                Some((CmdDraftSelect::NAME, matches)) => DraftSelect(CmdDraftSelect::from(matches)),
                Some((CmdDraftShow::NAME, matches)) => DraftShow(CmdDraftShow::from(matches)),
                Some((CmdDraftCommit::NAME, matches)) => DraftCommit(CmdDraftCommit::from(matches)),
                Some((CmdDraftDiscard::NAME, _)) => DraftDiscard(CmdDraftDiscard),
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Status(CmdStatus),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show enrolled courses and the open draft
    Status(CmdStatus),

    /// List enrolled courses
    Courses(CmdCourses),

    /// Open an editing session
    DraftNew(CmdDraftNew),

    /// Append a draft block
    DraftAdd(CmdDraftAdd),

    /// Remove a draft block
    DraftRemove(CmdDraftRemove),

    /// Update fields of a draft block
    DraftSet(CmdDraftSet),

    /// Change the active draft block
    DraftSelect(CmdDraftSelect),

    /// Show the draft with conflicts
    DraftShow(CmdDraftShow),

    /// Commit the draft
    DraftCommit(CmdDraftCommit),

    /// Discard the draft
    DraftDiscard(CmdDraftDiscard),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            // Completions need no configuration.
            GenerateCompletion(a) => a.run(),

            command => {
                tracing::debug!("Parsing configuration...");
                let config = parse_config(config)?;
                let planner = Planner::new(config);

                match command {
                    Status(a) => a.run(&planner),
                    Courses(a) => a.run(&planner),
                    DraftNew(a) => a.run(&planner),
                    DraftAdd(a) => a.run(&planner),
                    DraftRemove(a) => a.run(&planner),
                    DraftSet(a) => a.run(&planner),
                    DraftSelect(a) => a.run(&planner),
                    DraftShow(a) => a.run(&planner),
                    DraftCommit(a) => a.run(&planner),
                    DraftDiscard(a) => a.run(&planner),
                    GenerateCompletion(_) => unreachable!(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::parser::ArgOutputFormat;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_parse_default_status() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::try_parse_from(vec!["test", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_parse_courses() {
        let cli = Cli::try_parse_from(vec!["test", "courses", "--output-format", "json"]).unwrap();
        match cli.command {
            Commands::Courses(cmd) => {
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected Courses command"),
        }
    }

    #[test]
    fn test_parse_courses_alias() {
        let cli = Cli::try_parse_from(vec!["test", "c"]).unwrap();
        assert!(matches!(cli.command, Commands::Courses(_)));
    }

    #[test]
    fn test_parse_draft_new() {
        let cli = Cli::try_parse_from(vec!["test", "draft", "new", "alg-1"]).unwrap();
        match cli.command {
            Commands::DraftNew(cmd) => {
                assert_eq!(cmd.course_id, Some("alg-1".to_string()));
            }
            _ => panic!("Expected DraftNew command"),
        }
    }

    #[test]
    fn test_parse_draft_alias() {
        let cli = Cli::try_parse_from(vec!["test", "d", "add"]).unwrap();
        assert!(matches!(cli.command, Commands::DraftAdd(_)));
    }

    #[test]
    fn test_parse_draft_remove_alias() {
        let cli = Cli::try_parse_from(vec!["test", "draft", "rm", "2"]).unwrap();
        match cli.command {
            Commands::DraftRemove(cmd) => assert_eq!(cmd.index, 1),
            _ => panic!("Expected DraftRemove command"),
        }
    }

    #[test]
    fn test_parse_draft_set_for_active_block() {
        let cli = Cli::try_parse_from(vec!["test", "draft", "set", "--day", "tu"]).unwrap();
        match cli.command {
            Commands::DraftSet(cmd) => {
                assert_eq!(cmd.index, None);
                assert_eq!(cmd.day, Some(cursus_core::Weekday::Tu));
            }
            _ => panic!("Expected DraftSet command"),
        }
    }

    #[test]
    fn test_parse_draft_show() {
        let cli =
            Cli::try_parse_from(vec!["test", "draft", "show", "--output-format", "json"]).unwrap();
        match cli.command {
            Commands::DraftShow(cmd) => {
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected DraftShow command"),
        }
    }

    #[test]
    fn test_parse_draft_commit() {
        let cli = Cli::try_parse_from(vec!["test", "draft", "commit"]).unwrap();
        match cli.command {
            Commands::DraftCommit(cmd) => assert_eq!(cmd.output, None),
            _ => panic!("Expected DraftCommit command"),
        }
    }

    #[test]
    fn test_parse_draft_discard() {
        let cli = Cli::try_parse_from(vec!["test", "draft", "discard"]).unwrap();
        assert!(matches!(cli.command, Commands::DraftDiscard(_)));
    }

    #[test]
    fn test_parse_generate_completions() {
        let cli = Cli::try_parse_from(vec!["test", "generate-completion", "zsh"]).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
