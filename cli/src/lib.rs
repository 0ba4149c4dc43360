// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_courses;
mod cmd_draft;
mod cmd_generate_completion;
mod cmd_status;
mod config;
mod parser;
mod planner;
mod schedule_formatter;
mod session;
mod table;

use std::error::Error;

use colored::Colorize;

pub use crate::cli::{Cli, Commands};
pub use crate::config::Config;

/// Run the Cursus command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    }
    Ok(())
}
