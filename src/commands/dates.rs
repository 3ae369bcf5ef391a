// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar::{gregorian_to_local, local_to_gregorian, today_local};
use crate::utils::parse_date;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("today", _)) => println!("{}", today_local()?),
        Some(("to-gregorian", sub)) => println!("{}", to_gregorian(sub)?),
        Some(("to-jalali", sub)) => println!("{}", to_jalali(sub)?),
        _ => {}
    }
    Ok(())
}

fn date_arg(sub: &clap::ArgMatches) -> &str {
    sub.get_one::<String>("date").map(|s| s.trim()).unwrap_or("")
}

pub fn to_gregorian(sub: &clap::ArgMatches) -> Result<String> {
    Ok(local_to_gregorian(date_arg(sub))?.format("%Y-%m-%d").to_string())
}

pub fn to_jalali(sub: &clap::ArgMatches) -> Result<String> {
    Ok(gregorian_to_local(parse_date(date_arg(sub))?)?)
}
