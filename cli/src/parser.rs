// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use clap_num::number_range;
use cursus_core::Weekday;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Required 1-based block number, as shown in the draft listing.
pub fn arg_block() -> Arg {
    arg!(block: <BLOCK> "The block number, as shown by `draft show`")
        .value_parser(value_parser!(u8).range(1..))
}

pub fn get_block(matches: &ArgMatches) -> usize {
    let number: u8 = *matches.get_one("block").expect("block is required");
    usize::from(number) - 1
}

/// Optional 1-based block number; commands fall back to the active block.
pub fn arg_block_optional() -> Arg {
    arg_block().required(false)
}

pub fn get_block_optional(matches: &ArgMatches) -> Option<usize> {
    matches
        .get_one::<u8>("block")
        .map(|number| usize::from(*number) - 1)
}

pub fn arg_day() -> Arg {
    arg!(-d --day <DAY> "Day of the week for the block").value_parser(value_parser!(Weekday))
}

pub fn get_day(matches: &ArgMatches) -> Option<Weekday> {
    matches.get_one("day").copied()
}

pub fn arg_start() -> Arg {
    fn hour_in_day(s: &str) -> Result<u8, String> {
        number_range(s, 0, 23)
    }

    arg!(-s --start <HOUR> "Hour the block starts (0-23)").value_parser(hour_in_day)
}

pub fn get_start(matches: &ArgMatches) -> Option<u8> {
    matches.get_one("start").copied()
}

pub fn arg_duration() -> Arg {
    arg!(-D --duration <HOURS> "How many hours the block lasts")
        .value_parser(value_parser!(u8).range(1..))
}

pub fn get_duration(matches: &ArgMatches) -> Option<u8> {
    matches.get_one("duration").copied()
}

pub fn arg_room() -> Arg {
    arg!(-r --room <ROOM> "Room label; pass an empty string to clear it")
}

pub fn get_room(matches: &ArgMatches) -> Option<String> {
    matches.get_one("room").cloned()
}
