// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "The shell generator to use").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = *matches.get_one::<Shell>("shell").expect("shell is required");
        Self { shell }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self.shell {
            // Nushell ships its generator in a separate crate.
            Shell::Nushell => generate(clap_complete_nushell::Nushell {}, &mut cmd, name, buf),

            shell => {
                let shell = match shell {
                    Shell::Bash => ClapShell::Bash,
                    Shell::Elvish => ClapShell::Elvish,
                    Shell::Fish => ClapShell::Fish,
                    Shell::PowerShell => ClapShell::PowerShell,
                    Shell::Zsh => ClapShell::Zsh,
                    Shell::Nushell => unreachable!(),
                };
                generate(shell, &mut cmd, name, buf)
            }
        }
    }
}

/// Shells with a completion generator wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    PowerShell,
    Zsh,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(shell: &str) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(["cursus", CmdGenerateCompletion::NAME, shell])
            .unwrap_or_else(|e| panic!("Failed to parse for shell '{shell}': {e}"));
        let sub_matches = matches
            .subcommand_matches(CmdGenerateCompletion::NAME)
            .unwrap();
        CmdGenerateCompletion::from(sub_matches)
    }

    #[test]
    fn parses_every_shell() {
        assert_eq!(parse("bash").shell, Shell::Bash);
        assert_eq!(parse("elvish").shell, Shell::Elvish);
        assert_eq!(parse("fish").shell, Shell::Fish);
        assert_eq!(parse("nushell").shell, Shell::Nushell);
        assert_eq!(parse("powershell").shell, Shell::PowerShell);
        assert_eq!(parse("zsh").shell, Shell::Zsh);
    }

    #[test]
    fn generates_a_non_empty_script() {
        let mut output = vec![];
        parse("zsh").generate(&mut output);
        assert!(!output.is_empty());
    }
}
